//! Scroll offset to frame index mapping.

/// Scroll offset past which the navbar switches to its compact style
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of a viewport after which the hero overlay hides
pub const OVERLAY_HIDE_FRACTION: f64 = 0.8;

/// Scroll distance over which a sequence plays through, as a multiple of viewport height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    viewports: f64,
}

impl ScrollWindow {
    pub fn new(viewports: f64) -> Self {
        Self {
            viewports: viewports.max(f64::EPSILON),
        }
    }

    /// Window size for the given viewport height
    pub fn size(&self, viewport_height: f64) -> f64 {
        viewport_height * self.viewports
    }

    /// Frame to show at `scroll_offset` for a sequence of `frame_count` frames
    pub fn frame_at(&self, scroll_offset: f64, viewport_height: f64, frame_count: usize) -> usize {
        let progress = scroll_progress(scroll_offset, self.size(viewport_height));
        frame_for_progress(progress, frame_count)
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(2.5)
    }
}

/// `clamp(s / W, 0, 1)`; a degenerate window counts as fully scrolled once s > 0
pub fn scroll_progress(scroll_offset: f64, window: f64) -> f64 {
    if window <= 0.0 || !window.is_finite() {
        return if scroll_offset > 0.0 { 1.0 } else { 0.0 };
    }
    let progress = scroll_offset / window;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// `floor(progress * (N - 1))`, always within `[0, N-1]`
pub fn frame_for_progress(progress: f64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let last = frame_count - 1;
    let index = (progress.clamp(0.0, 1.0) * last as f64).floor() as usize;
    index.min(last)
}

/// Page chrome that follows the scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEffects {
    /// Navbar uses its compact "scrolled" style
    pub navbar_scrolled: bool,
    /// Hero overlay, scroll prompt and social row are visible
    pub overlay_visible: bool,
}

impl ScrollEffects {
    pub fn at(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            navbar_scrolled: scroll_offset > NAVBAR_SCROLL_THRESHOLD,
            overlay_visible: scroll_offset <= viewport_height * OVERLAY_HIDE_FRACTION,
        }
    }
}
