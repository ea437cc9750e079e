use std::sync::Arc;

use futures::stream::{self, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::frames::{frame_address, Frame, FrameSequence, LoadProgress};
use super::source::{decode_frame, FrameSource};
use crate::Error;

/// Completion messages delivered to the UI loop
#[derive(Debug, Clone)]
pub enum PreloadEvent {
    /// One frame attempt finished; `frame` is `None` when it failed
    FrameSettled {
        generation: u64,
        index: usize,
        frame: Option<Frame>,
    },
    /// Every attempt for the generation has settled
    Completed { generation: u64 },
}

impl PreloadEvent {
    pub fn generation(&self) -> u64 {
        match self {
            PreloadEvent::FrameSettled { generation, .. } | PreloadEvent::Completed { generation } => {
                *generation
            }
        }
    }
}

/// What to load, tagged with the generation it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadRequest {
    pub generation: u64,
    pub variant: usize,
    pub frame_dir: String,
    pub frame_count: usize,
}

/// Fetches and decodes every frame of a variant
#[derive(Clone)]
pub struct Preloader {
    source: Arc<dyn FrameSource>,
    max_concurrent: Option<usize>,
}

impl Preloader {
    /// `max_concurrent = None` requests every frame at once
    pub fn new(source: Arc<dyn FrameSource>, max_concurrent: Option<usize>) -> Self {
        Self {
            source,
            max_concurrent,
        }
    }

    /// Run a preload on the runtime, streaming results into `tx`
    pub fn spawn(
        &self,
        request: PreloadRequest,
        tx: mpsc::UnboundedSender<PreloadEvent>,
    ) -> JoinHandle<()> {
        let preloader = self.clone();
        tokio::spawn(async move { preloader.run(request, tx).await })
    }

    /// Load every frame of the request, sending one event per settled attempt
    /// and a final `Completed`. Stops early if the receiver is gone.
    pub async fn run(&self, request: PreloadRequest, tx: mpsc::UnboundedSender<PreloadEvent>) {
        let generation = request.generation;
        info!(
            "Preloading {} frames from {} (generation {})",
            request.frame_count, request.frame_dir, generation
        );

        let mut settled = Box::pin(self.settle(&request.frame_dir, request.frame_count));
        while let Some((index, frame)) = settled.next().await {
            if tx
                .send(PreloadEvent::FrameSettled {
                    generation,
                    index,
                    frame,
                })
                .is_err()
            {
                debug!("Preload receiver dropped, abandoning generation {}", generation);
                return;
            }
        }

        if tx.send(PreloadEvent::Completed { generation }).is_err() {
            debug!("Preload receiver dropped before completion of generation {}", generation);
        }
    }

    /// Load a whole sequence, resolving once every attempt has settled
    pub async fn load_sequence<F>(
        &self,
        frame_dir: &str,
        frame_count: usize,
        mut on_progress: F,
    ) -> FrameSequence
    where
        F: FnMut(LoadProgress),
    {
        let mut sequence = FrameSequence::new(frame_count);
        let mut progress = LoadProgress::new(frame_count);

        let mut settled = Box::pin(self.settle(frame_dir, frame_count));
        while let Some((index, frame)) = settled.next().await {
            if let Some(frame) = frame {
                sequence.set(index, frame);
            }
            progress.record();
            on_progress(progress);
        }

        sequence
    }

    /// Stream of `(index, frame)` in completion order
    fn settle(
        &self,
        frame_dir: &str,
        frame_count: usize,
    ) -> impl Stream<Item = (usize, Option<Frame>)> + Send + 'static {
        let limit = self.max_concurrent.unwrap_or(frame_count).max(1);
        let source = Arc::clone(&self.source);
        let frame_dir = frame_dir.to_string();

        stream::iter(0..frame_count)
            .map(move |index| {
                let source = Arc::clone(&source);
                let address = frame_address(&frame_dir, index);
                async move { (index, load_frame(source.as_ref(), &address, index).await) }
            })
            .buffer_unordered(limit)
    }
}

/// Fetch and decode one frame. Failures are logged and reported as `None`.
async fn load_frame(source: &dyn FrameSource, address: &str, index: usize) -> Option<Frame> {
    let failed = |message: String| {
        let err = Error::FrameLoad {
            index,
            address: source.locate(address),
            message,
        };
        warn!("{}", err);
        None
    };

    let bytes = match source.fetch(address).await {
        Ok(bytes) => bytes,
        Err(e) => return failed(e.to_string()),
    };

    match tokio::task::spawn_blocking(move || decode_frame(&bytes)).await {
        Ok(Ok(image)) => Some(Arc::new(image)),
        Ok(Err(e)) => failed(e.to_string()),
        Err(e) => failed(format!("decode task failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use async_trait::async_trait;
    use bytes::Bytes;
    use image::{DynamicImage, ImageFormat};
    use std::collections::HashSet;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves a tiny PNG for every address except the listed frame indices
    struct MockSource {
        png: Bytes,
        failing: HashSet<usize>,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl MockSource {
        fn new(failing: impl IntoIterator<Item = usize>) -> Self {
            let mut png = Vec::new();
            DynamicImage::new_rgba8(4, 3)
                .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
                .unwrap();
            Self {
                png: Bytes::from(png),
                failing: failing.into_iter().collect(),
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FrameSource for MockSource {
        async fn fetch(&self, address: &str) -> Result<Bytes> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let index: usize = address
                .rsplit("frame_")
                .next()
                .and_then(|rest| rest.get(..3))
                .and_then(|digits| digits.parse().ok())
                .ok_or_else(|| Error::Other(format!("bad address {}", address)))?;

            if self.failing.contains(&index) {
                Err(Error::Other("404".to_string()))
            } else {
                Ok(self.png.clone())
            }
        }

        fn locate(&self, address: &str) -> String {
            format!("mock://{}", address)
        }
    }

    #[tokio::test]
    async fn test_sequence_resolves_despite_failures() {
        let source = Arc::new(MockSource::new([3, 40, 77, 150, 191]));
        let preloader = Preloader::new(source, None);

        let mut reports = Vec::new();
        let sequence = preloader
            .load_sequence("frames/vermicompost", 192, |p| reports.push(p))
            .await;

        assert_eq!(sequence.len(), 192);
        assert_eq!(sequence.loaded_count(), 187);
        for hole in [3, 40, 77, 150, 191] {
            assert!(!sequence.is_loaded(hole));
        }
        assert!(sequence.is_loaded(0));
        assert_eq!(sequence.get(0).unwrap().width(), 4);

        assert_eq!(reports.len(), 192);
        assert!(reports.windows(2).all(|w| w[0].settled() < w[1].settled()));
        assert_eq!(reports.last().unwrap().percent(), 100);
        assert_eq!(reports[95].percent(), 50);
    }

    #[tokio::test]
    async fn test_run_streams_events_then_completes() {
        let source = Arc::new(MockSource::new([1]));
        let preloader = Preloader::new(source, None);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let request = PreloadRequest {
            generation: 7,
            variant: 0,
            frame_dir: "frames/pot-mixture".to_string(),
            frame_count: 3,
        };
        preloader.spawn(request, tx).await.unwrap();

        let mut settled = Vec::new();
        let mut completed = false;
        while let Some(event) = rx.recv().await {
            assert_eq!(event.generation(), 7);
            match event {
                PreloadEvent::FrameSettled { index, frame, .. } => {
                    assert!(!completed);
                    settled.push((index, frame.is_some()));
                }
                PreloadEvent::Completed { .. } => completed = true,
            }
        }

        settled.sort();
        assert_eq!(settled, vec![(0, true), (1, false), (2, true)]);
        assert!(completed);
    }

    #[tokio::test]
    async fn test_concurrency_cap_respected() {
        let source = Arc::new(MockSource::new([]));
        let preloader = Preloader::new(source.clone(), Some(4));

        let sequence = preloader.load_sequence("frames/x", 32, |_| {}).await;
        assert_eq!(sequence.loaded_count(), 32);
        assert!(source.peak.load(Ordering::SeqCst) <= 4);
    }

    #[tokio::test]
    async fn test_empty_sequence_completes_immediately() {
        let preloader = Preloader::new(Arc::new(MockSource::new([])), None);
        let sequence = preloader.load_sequence("frames/x", 0, |_| {}).await;
        assert!(sequence.is_empty());
    }
}
