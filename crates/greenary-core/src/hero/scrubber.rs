//! The scroll-scrubbed hero sequence.
//!
//! [`HeroScrubber`] owns the active variant, its frame sequence and every
//! timer-driven presentation change. It never performs I/O itself: callers
//! run the [`PreloadRequest`]s it hands out (see [`Preloader`](super::Preloader))
//! and feed the resulting events back through [`HeroScrubber::on_preload_event`].

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::frames::{FrameSequence, LoadProgress};
use super::mapping::{ScrollEffects, ScrollWindow};
use super::preload::{PreloadEvent, PreloadRequest};
use super::selector::VariantSelector;
use super::state::{Direction, HeroPhase, ScrubState};
use super::surface::HeroSurface;
use super::swipe::SwipeTracker;
use super::throttle::ScrollCoalescer;
use super::transition::{MetadataElement, MetadataStep, MetadataTransition};
use crate::config::HeroConfig;
use crate::site::VariantRecord;

pub struct HeroScrubber<S: HeroSurface> {
    variants: Vec<VariantRecord>,
    surface: S,
    phase: HeroPhase,
    state: ScrubState,
    story_mode: bool,

    generation: u64,
    sequence: FrameSequence,
    progress: LoadProgress,
    /// Generation whose frame is currently on the canvas
    drawn_generation: Option<u64>,
    animate: bool,
    full_loader: bool,
    loader_hide_at: Option<Instant>,
    loader_hide_delay: Duration,
    /// Scroll is ignored until the first loader has gone
    scroll_locked: bool,

    window: ScrollWindow,
    scroll_offset: f64,
    viewport_height: f64,
    coalescer: ScrollCoalescer,
    swipe: SwipeTracker,
    transition: MetadataTransition,
}

impl<S: HeroSurface> HeroScrubber<S> {
    /// Create the scrubber and show the starting variant's text straight away
    pub fn new(
        variants: Vec<VariantRecord>,
        selector: &VariantSelector,
        config: &HeroConfig,
        surface: S,
    ) -> Self {
        let initial = selector.resolve(&variants);
        let story_mode = selector.is_story_mode();

        let mut scrubber = Self {
            variants,
            surface,
            phase: HeroPhase::Loading { variant: initial },
            state: ScrubState {
                variant: initial,
                frame: 0,
            },
            story_mode,
            generation: 0,
            sequence: FrameSequence::default(),
            progress: LoadProgress::default(),
            drawn_generation: None,
            animate: false,
            full_loader: false,
            loader_hide_at: None,
            loader_hide_delay: Duration::from_millis(config.loader_hide_delay_ms),
            scroll_locked: true,
            window: ScrollWindow::new(config.scroll_window_viewports),
            scroll_offset: 0.0,
            viewport_height: 0.0,
            coalescer: ScrollCoalescer::new(),
            swipe: SwipeTracker::new(config.swipe_threshold),
            transition: MetadataTransition::new(
                Duration::from_millis(config.switch_fade_ms),
                Duration::from_millis(config.fade_in_stagger_ms),
            ),
        };

        scrubber.surface.set_nav_visible(!story_mode);
        scrubber.apply_metadata(initial);
        scrubber
    }

    /// Start loading the initial variant behind the full-screen loader.
    /// Returns `None` when there is no canvas or no variant; the hero is then
    /// ready at once.
    pub fn begin_preload(&mut self) -> Option<PreloadRequest> {
        self.animate = self.surface.canvas_size().is_some();
        let variant = self.state.variant;

        if !self.animate || self.variants.get(variant).is_none() {
            info!("No hero canvas available, skipping frame animation");
            self.surface.hide_loader();
            self.scroll_locked = false;
            self.phase = HeroPhase::Ready { variant, frame: 0 };
            return None;
        }

        self.full_loader = true;
        self.surface.show_loader();
        self.surface.set_progress(0);
        self.request_for(variant)
    }

    /// Move to the neighbouring variant. Text updates at once through the
    /// fade transition; frames for the new variant must be loaded with the
    /// returned request. Ignored in story mode.
    pub fn switch(&mut self, direction: Direction, now: Instant) -> Option<PreloadRequest> {
        if self.story_mode {
            debug!("Ignoring {:?} switch in story mode", direction);
            return None;
        }
        if self.variants.is_empty() {
            return None;
        }

        let from = self.state.variant;
        let to = direction.step(from, self.variants.len());
        info!("Switching hero variant {} -> {}", from, to);

        self.state.variant = to;
        for step in self.transition.start(to, now) {
            self.apply_step(step);
        }

        if !self.animate {
            let count = self.variants.get(to).map_or(0, |v| v.frame_count);
            self.state.frame = clamp_frame(self.state.frame, count);
            self.phase = HeroPhase::Ready {
                variant: to,
                frame: self.state.frame,
            };
            return None;
        }

        self.phase = HeroPhase::Switching { from, to };
        self.full_loader = false;
        self.surface.set_mini_loader(true);
        self.request_for(to)
    }

    fn request_for(&mut self, variant: usize) -> Option<PreloadRequest> {
        let record = self.variants.get(variant)?;
        self.generation += 1;
        self.sequence = FrameSequence::new(record.frame_count);
        self.progress = LoadProgress::new(record.frame_count);
        // The old variant's picture may stay up, but its index must fit the new sequence
        self.state.frame = clamp_frame(self.state.frame, record.frame_count);

        Some(PreloadRequest {
            generation: self.generation,
            variant,
            frame_dir: record.frame_dir.clone(),
            frame_count: record.frame_count,
        })
    }

    /// Apply one preload result. Returns `false` for events of an outdated generation.
    pub fn on_preload_event(&mut self, event: PreloadEvent, now: Instant) -> bool {
        if event.generation() != self.generation {
            debug!(
                "Dropping stale preload event (generation {}, current {})",
                event.generation(),
                self.generation
            );
            return false;
        }

        match event {
            PreloadEvent::FrameSettled { index, frame, .. } => {
                self.progress.record();
                if let Some(frame) = frame {
                    self.sequence.set(index, frame);
                }
                if self.full_loader {
                    self.surface.set_progress(self.progress.percent());
                }
                if index == self.target_frame() {
                    self.render_target();
                }
            }
            PreloadEvent::Completed { .. } => {
                info!(
                    "Variant {} ready: {}/{} frames loaded",
                    self.state.variant,
                    self.sequence.loaded_count(),
                    self.sequence.len()
                );
                self.phase = HeroPhase::Ready {
                    variant: self.state.variant,
                    frame: self.state.frame,
                };
                if self.full_loader {
                    self.loader_hide_at = Some(now + self.loader_hide_delay);
                } else {
                    self.surface.set_mini_loader(false);
                    self.redraw();
                }
            }
        }
        true
    }

    /// Record a scroll position; the frame is recomputed on the next tick
    pub fn on_scroll(&mut self, offset: f64) {
        self.coalescer.push(offset);
    }

    /// Viewport height in scroll units. Redraws the current frame.
    pub fn on_resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(0.0);
        self.redraw();
    }

    pub fn swipe_begin(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    /// Forget a drag that left the hero
    pub fn swipe_cancel(&mut self) {
        self.swipe.cancel();
    }

    pub fn swipe_end(&mut self, x: f64, now: Instant) -> Option<PreloadRequest> {
        let direction = self.swipe.end(x)?;
        self.switch(direction, now)
    }

    /// Advance fades, the loader timer and any pending scroll recompute
    pub fn tick(&mut self, now: Instant) {
        for step in self.transition.tick(now) {
            self.apply_step(step);
        }

        if self.loader_hide_at.is_some_and(|at| now >= at) {
            self.loader_hide_at = None;
            self.surface.hide_loader();
            self.scroll_locked = false;
            // Any offset reached while the loader was up applies now
            self.coalescer.push(self.scroll_offset);
            self.redraw();
        }

        if let Some(offset) = self.coalescer.take() {
            self.recompute(offset);
        }
    }

    fn recompute(&mut self, offset: f64) {
        self.scroll_offset = offset;
        if self.scroll_locked {
            return;
        }

        self.surface
            .apply_scroll_effects(ScrollEffects::at(offset, self.viewport_height));

        if self.animate {
            self.render_target();
        }
    }

    fn target_frame(&self) -> usize {
        self.window
            .frame_at(self.scroll_offset, self.viewport_height, self.sequence.len())
    }

    /// Draw the frame for the current offset if it differs from what is shown and loaded
    fn render_target(&mut self) {
        let target = self.target_frame();
        let fresh = self.drawn_generation == Some(self.generation);
        if fresh && target == self.state.frame {
            return;
        }
        self.draw(target);
    }

    /// Draw the displayed frame again, e.g. after a resize
    fn redraw(&mut self) {
        if !self.animate {
            return;
        }
        let index = if self.drawn_generation == Some(self.generation) {
            self.state.frame
        } else {
            self.target_frame()
        };
        self.draw(index);
    }

    fn draw(&mut self, index: usize) {
        let Some(frame) = self.sequence.get(index) else {
            return;
        };
        self.surface.draw_frame(index, frame);
        self.state.frame = index;
        self.drawn_generation = Some(self.generation);

        self.phase = match self.phase {
            HeroPhase::Switching { to, .. } => HeroPhase::Loading { variant: to },
            HeroPhase::Ready { variant, .. } => HeroPhase::Ready {
                variant,
                frame: index,
            },
            loading => loading,
        };
    }

    fn apply_step(&mut self, step: MetadataStep) {
        match step {
            MetadataStep::FadeOut => {
                for element in MetadataElement::ORDER {
                    self.surface.set_element_visible(element, false);
                }
            }
            MetadataStep::Apply { variant } => self.apply_metadata(variant),
            MetadataStep::FadeIn(element) => self.surface.set_element_visible(element, true),
        }
    }

    fn apply_metadata(&mut self, variant: usize) {
        let Some(record) = self.variants.get(variant) else {
            return;
        };
        self.surface.set_name(&record.name);
        self.surface.set_subtitle(&record.subtitle);
        self.surface.set_description(&record.description);
        self.surface.set_index(&format!("{:02}", variant + 1));
        self.surface.set_accent(&record.theme_color);

        let story = if self.story_mode {
            None
        } else {
            record.experience_url.as_deref().filter(|u| !u.is_empty())
        };
        self.surface.set_story_link(story);
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn progress(&self) -> LoadProgress {
        self.progress
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    pub fn is_story_mode(&self) -> bool {
        self.story_mode
    }

    pub fn variants(&self) -> &[VariantRecord] {
        &self.variants
    }

    pub fn active_variant(&self) -> Option<&VariantRecord> {
        self.variants.get(self.state.variant)
    }

    /// A fade, loader timer or scroll recompute is still pending
    pub fn is_animating(&self) -> bool {
        self.transition.is_active() || self.loader_hide_at.is_some() || self.coalescer.is_pending()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Largest valid index for a sequence of `count` frames
fn clamp_frame(frame: usize, count: usize) -> usize {
    frame.min(count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::frames::Frame;
    use image::DynamicImage;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingSurface {
        canvas: bool,
        drawn: Vec<usize>,
        loader_visible: bool,
        mini_loader: bool,
        percent: u8,
        name: String,
        index: String,
        accent: String,
        story: Option<String>,
        nav_visible: bool,
        hidden: Vec<MetadataElement>,
        effects: Option<ScrollEffects>,
    }

    impl HeroSurface for RecordingSurface {
        fn canvas_size(&self) -> Option<(u32, u32)> {
            self.canvas.then_some((160, 90))
        }
        fn draw_frame(&mut self, index: usize, _frame: &Frame) {
            self.drawn.push(index);
        }
        fn show_loader(&mut self) {
            self.loader_visible = true;
        }
        fn set_progress(&mut self, percent: u8) {
            self.percent = percent;
        }
        fn hide_loader(&mut self) {
            self.loader_visible = false;
        }
        fn set_mini_loader(&mut self, visible: bool) {
            self.mini_loader = visible;
        }
        fn set_name(&mut self, text: &str) {
            self.name = text.to_string();
        }
        fn set_index(&mut self, label: &str) {
            self.index = label.to_string();
        }
        fn set_accent(&mut self, color: &str) {
            self.accent = color.to_string();
        }
        fn set_story_link(&mut self, target: Option<&str>) {
            self.story = target.map(str::to_string);
        }
        fn set_nav_visible(&mut self, visible: bool) {
            self.nav_visible = visible;
        }
        fn set_element_visible(&mut self, element: MetadataElement, visible: bool) {
            self.hidden.retain(|e| *e != element);
            if !visible {
                self.hidden.push(element);
            }
        }
        fn apply_scroll_effects(&mut self, effects: ScrollEffects) {
            self.effects = Some(effects);
        }
    }

    fn variants() -> Vec<VariantRecord> {
        vec![
            VariantRecord {
                id: "pot-mixture".to_string(),
                name: "POT MIXTURE".to_string(),
                theme_color: "#8D6E63".to_string(),
                frame_dir: "frames/pot-mixture".to_string(),
                frame_count: 11,
                ..Default::default()
            },
            VariantRecord {
                id: "vermicompost".to_string(),
                name: "VERMICOMPOST".to_string(),
                theme_color: "#d4a53c".to_string(),
                frame_dir: "frames/vermicompost".to_string(),
                frame_count: 11,
                experience_url: Some("experience.html?id=vermicompost".to_string()),
                ..Default::default()
            },
        ]
    }

    fn scrubber(canvas: bool, selector: VariantSelector) -> HeroScrubber<RecordingSurface> {
        scrubber_with(variants(), canvas, selector)
    }

    fn scrubber_with(
        variants: Vec<VariantRecord>,
        canvas: bool,
        selector: VariantSelector,
    ) -> HeroScrubber<RecordingSurface> {
        let surface = RecordingSurface {
            canvas,
            ..Default::default()
        };
        let mut scrubber =
            HeroScrubber::new(variants, &selector, &HeroConfig::default(), surface);
        // 10 units of viewport -> window of 25
        scrubber.on_resize(10.0);
        scrubber
    }

    fn frame() -> Option<Frame> {
        Some(Arc::new(DynamicImage::new_rgba8(1, 1)))
    }

    /// Deliver every frame except `holes`, then completion
    fn settle_all(scrubber: &mut HeroScrubber<RecordingSurface>, holes: &[usize], now: Instant) {
        let generation = scrubber.generation();
        let count = scrubber.sequence().len();
        for index in 0..count {
            let frame = if holes.contains(&index) { None } else { frame() };
            scrubber.on_preload_event(
                PreloadEvent::FrameSettled {
                    generation,
                    index,
                    frame,
                },
                now,
            );
        }
        scrubber.on_preload_event(PreloadEvent::Completed { generation }, now);
    }

    #[test]
    fn test_initial_metadata_applied_immediately() {
        let scrubber = scrubber(true, VariantSelector::first());
        let surface = scrubber.surface();
        assert_eq!(surface.name, "POT MIXTURE");
        assert_eq!(surface.index, "01");
        assert_eq!(surface.accent, "#8D6E63");
        assert_eq!(surface.story, None);
        assert!(surface.nav_visible);
        assert_eq!(scrubber.phase(), HeroPhase::Loading { variant: 0 });
    }

    #[test]
    fn test_no_canvas_is_ready_at_once() {
        let mut scrubber = scrubber(false, VariantSelector::first());
        assert!(scrubber.begin_preload().is_none());
        assert!(scrubber.phase().is_ready());
        assert!(!scrubber.surface().loader_visible);

        // The rest of the hero keeps working
        let now = Instant::now();
        assert!(scrubber.switch(Direction::Next, now).is_none());
        scrubber.tick(now + Duration::from_millis(400));
        assert_eq!(scrubber.surface().name, "VERMICOMPOST");
        assert_eq!(scrubber.phase(), HeroPhase::Ready { variant: 1, frame: 0 });
    }

    #[test]
    fn test_initial_preload_progress_and_loader() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        let request = scrubber.begin_preload().unwrap();
        assert_eq!(request.frame_count, 11);
        assert_eq!(request.frame_dir, "frames/pot-mixture");
        assert!(scrubber.surface().loader_visible);

        settle_all(&mut scrubber, &[], now);
        assert_eq!(scrubber.surface().percent, 100);
        assert_eq!(scrubber.phase(), HeroPhase::Ready { variant: 0, frame: 0 });
        assert_eq!(scrubber.surface().drawn, vec![0]);

        scrubber.tick(now + Duration::from_millis(499));
        assert!(scrubber.surface().loader_visible);
        scrubber.tick(now + Duration::from_millis(500));
        assert!(!scrubber.surface().loader_visible);
    }

    #[test]
    fn test_scroll_renders_only_changed_loaded_frames() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();
        settle_all(&mut scrubber, &[5], now);
        scrubber.tick(now + Duration::from_secs(1));
        let baseline = scrubber.surface().drawn.len();

        // Window 25, 11 frames: offset 10 -> progress 0.4 -> frame 4
        scrubber.on_scroll(3.0);
        scrubber.on_scroll(10.0);
        scrubber.tick(now + Duration::from_secs(1));
        assert_eq!(scrubber.surface().drawn[baseline..], [4]);

        // Same frame again: no redraw
        scrubber.on_scroll(10.5);
        scrubber.tick(now + Duration::from_secs(1));
        assert_eq!(scrubber.surface().drawn.len(), baseline + 1);

        // Offset 12.5 -> frame 5, which failed: keep frame 4
        scrubber.on_scroll(12.5);
        scrubber.tick(now + Duration::from_secs(1));
        assert_eq!(scrubber.state().frame, 4);
        assert_eq!(scrubber.surface().drawn.len(), baseline + 1);

        scrubber.on_scroll(100.0);
        scrubber.tick(now + Duration::from_secs(1));
        assert_eq!(scrubber.state().frame, 10);
        assert_eq!(scrubber.phase(), HeroPhase::Ready { variant: 0, frame: 10 });

        let effects = scrubber.surface().effects.unwrap();
        assert!(effects.navbar_scrolled);
        assert!(!effects.overlay_visible);
    }

    #[test]
    fn test_scroll_ignored_while_loader_visible() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();
        settle_all(&mut scrubber, &[], now);

        scrubber.on_scroll(100.0);
        scrubber.tick(now);
        assert_eq!(scrubber.state().frame, 0);
        assert!(scrubber.surface().effects.is_none());

        scrubber.tick(now + Duration::from_millis(500));
        assert_eq!(scrubber.state().frame, 10);
    }

    #[test]
    fn test_switch_keeps_old_frame_until_new_one_arrives() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();
        settle_all(&mut scrubber, &[], now);
        scrubber.tick(now + Duration::from_millis(500));
        let drawn = scrubber.surface().drawn.len();

        let request = scrubber.switch(Direction::Next, now).unwrap();
        assert_eq!(request.variant, 1);
        assert_eq!(request.generation, 2);
        assert_eq!(scrubber.state().variant, 1);
        assert_eq!(scrubber.phase(), HeroPhase::Switching { from: 0, to: 1 });
        assert!(scrubber.surface().mini_loader);
        assert!(!scrubber.surface().loader_visible);
        assert_eq!(scrubber.surface().drawn.len(), drawn);

        // A frame other than the current one does not replace the picture
        scrubber.on_preload_event(
            PreloadEvent::FrameSettled {
                generation: 2,
                index: 7,
                frame: frame(),
            },
            now,
        );
        assert_eq!(scrubber.phase(), HeroPhase::Switching { from: 0, to: 1 });

        scrubber.on_preload_event(
            PreloadEvent::FrameSettled {
                generation: 2,
                index: 0,
                frame: frame(),
            },
            now,
        );
        assert_eq!(scrubber.phase(), HeroPhase::Loading { variant: 1 });
        assert_eq!(scrubber.surface().drawn.len(), drawn + 1);

        scrubber.on_preload_event(PreloadEvent::Completed { generation: 2 }, now);
        assert!(scrubber.phase().is_ready());
        assert!(!scrubber.surface().mini_loader);
    }

    #[test]
    fn test_stale_generation_never_touches_sequence() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();
        scrubber.switch(Direction::Next, now);
        scrubber.switch(Direction::Previous, now);
        assert_eq!(scrubber.generation(), 3);

        let accepted = scrubber.on_preload_event(
            PreloadEvent::FrameSettled {
                generation: 2,
                index: 0,
                frame: frame(),
            },
            now,
        );
        assert!(!accepted);
        assert_eq!(scrubber.sequence().loaded_count(), 0);
        assert_eq!(scrubber.progress().settled(), 0);

        assert!(!scrubber.on_preload_event(PreloadEvent::Completed { generation: 1 }, now));
        assert!(!scrubber.phase().is_ready());
    }

    #[test]
    fn test_metadata_follows_fade_delay() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();

        scrubber.switch(Direction::Previous, now);
        assert_eq!(scrubber.surface().name, "POT MIXTURE");
        assert_eq!(scrubber.surface().hidden.len(), 4);

        scrubber.tick(now + Duration::from_millis(399));
        assert_eq!(scrubber.surface().name, "POT MIXTURE");

        scrubber.tick(now + Duration::from_millis(400));
        let surface = scrubber.surface();
        assert_eq!(surface.name, "VERMICOMPOST");
        assert_eq!(surface.index, "02");
        assert_eq!(surface.accent, "#d4a53c");
        assert_eq!(surface.story.as_deref(), Some("experience.html?id=vermicompost"));
        assert_eq!(surface.hidden.len(), 3);

        scrubber.tick(now + Duration::from_millis(700));
        assert!(scrubber.surface().hidden.is_empty());
    }

    #[test]
    fn test_story_mode() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::from_id("vermicompost"));
        assert!(scrubber.is_story_mode());
        assert_eq!(scrubber.state().variant, 1);
        assert!(!scrubber.surface().nav_visible);
        assert_eq!(scrubber.surface().story, None);

        scrubber.begin_preload();
        assert!(scrubber.switch(Direction::Next, now).is_none());
        scrubber.swipe_begin(300.0);
        assert!(scrubber.swipe_end(0.0, now).is_none());
        assert_eq!(scrubber.state().variant, 1);
        assert_eq!(scrubber.generation(), 1);
    }

    #[test]
    fn test_swipe_switches() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();

        scrubber.swipe_begin(100.0);
        assert!(scrubber.swipe_end(80.0, now).is_none());

        scrubber.swipe_begin(100.0);
        let request = scrubber.swipe_end(200.0, now).unwrap();
        assert_eq!(request.variant, 1);
    }

    #[test]
    fn test_switch_to_shorter_sequence_keeps_index_in_range() {
        let now = Instant::now();
        let mut short = variants();
        short[1].frame_count = 3;
        let mut scrubber = scrubber_with(short, true, VariantSelector::first());
        scrubber.begin_preload();
        settle_all(&mut scrubber, &[], now);
        scrubber.tick(now + Duration::from_millis(500));

        scrubber.on_scroll(100.0);
        scrubber.tick(now + Duration::from_millis(500));
        assert_eq!(scrubber.state().frame, 10);

        let request = scrubber.switch(Direction::Next, now).unwrap();
        assert_eq!(request.frame_count, 3);
        assert!(scrubber.state().frame < 3);

        // The frame the scroll position wants is the one that fails
        settle_all(&mut scrubber, &[2], now);
        assert_eq!(scrubber.phase(), HeroPhase::Ready { variant: 1, frame: 2 });
        assert_eq!(scrubber.state().frame, 2);
        // Old picture stays on the canvas
        assert_eq!(scrubber.surface().drawn.last(), Some(&10));
    }

    #[test]
    fn test_resize_redraws_displayed_frame() {
        let now = Instant::now();
        let mut scrubber = scrubber(true, VariantSelector::first());
        scrubber.begin_preload();

        // Nothing loaded yet: nothing to redraw
        scrubber.on_resize(20.0);
        assert!(scrubber.surface().drawn.is_empty());

        settle_all(&mut scrubber, &[], now);
        scrubber.tick(now + Duration::from_millis(500));
        scrubber.on_scroll(100.0);
        scrubber.tick(now + Duration::from_millis(500));
        let drawn = scrubber.surface().drawn.len();
        assert_eq!(scrubber.surface().drawn.last(), Some(&10));

        scrubber.on_resize(10.0);
        assert_eq!(scrubber.surface().drawn.len(), drawn + 1);
        assert_eq!(scrubber.surface().drawn.last(), Some(&10));
    }
}
