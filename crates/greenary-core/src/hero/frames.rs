use std::sync::Arc;

use image::DynamicImage;

/// A decoded frame shared between the sequence and whoever draws it
pub type Frame = Arc<DynamicImage>;

/// Per-frame filename suffix used by the exported sequences
const FRAME_SUFFIX: &str = "_delay-0.04s.webp";

/// Address of one frame inside a frame directory, e.g.
/// `frames/vermicompost/frame_007_delay-0.04s.webp`
pub fn frame_address(frame_dir: &str, index: usize) -> String {
    format!(
        "{}/frame_{:03}{}",
        frame_dir.trim_end_matches('/'),
        index,
        FRAME_SUFFIX
    )
}

/// Decoded frames of one variant. Slots stay empty when a load failed.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Option<Frame>>,
}

impl FrameSequence {
    pub fn new(len: usize) -> Self {
        Self {
            frames: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Fill a slot; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, frame: Frame) {
        if let Some(slot) = self.frames.get_mut(index) {
            *slot = Some(frame);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index).and_then(Option::as_ref)
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }
}

/// Settled/attempted counter for one preload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadProgress {
    settled: usize,
    total: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self { settled: 0, total }
    }

    /// Count one attempt as settled, whether it succeeded or failed
    pub fn record(&mut self) {
        self.settled = (self.settled + 1).min(self.total);
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.settled >= self.total
    }

    /// Rounded percentage for display
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.settled as f64 / self.total as f64) * 100.0).round() as u8
    }
}
