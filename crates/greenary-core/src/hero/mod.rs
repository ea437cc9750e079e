mod fit;
mod frames;
mod mapping;
mod preload;
mod scrubber;
mod selector;
mod source;
mod state;
mod surface;
mod swipe;
mod throttle;
mod transition;

pub use fit::{cover_crop, cover_fit, DrawRect};
pub use frames::{frame_address, Frame, FrameSequence, LoadProgress};
pub use mapping::{
    frame_for_progress, scroll_progress, ScrollEffects, ScrollWindow, NAVBAR_SCROLL_THRESHOLD,
    OVERLAY_HIDE_FRACTION,
};
pub use preload::{PreloadEvent, PreloadRequest, Preloader};
pub use scrubber::HeroScrubber;
pub use selector::VariantSelector;
pub use source::{decode_frame, frame_source_for, FrameSource, FsFrameSource, HttpFrameSource};
pub use state::{Direction, HeroPhase, ScrubState};
pub use surface::HeroSurface;
pub use swipe::{classify as classify_swipe, SwipeTracker};
pub use throttle::ScrollCoalescer;
pub use transition::{MetadataElement, MetadataStep, MetadataTransition, TransitionPhase};
