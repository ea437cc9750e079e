//! Drawing and presentation hooks the hero drives.
//!
//! Every hook defaults to a no-op, so a front end implements only the
//! elements it actually has. A surface without a canvas (`canvas_size`
//! returning `None`) makes the scrubber skip animation entirely.

use super::frames::Frame;
use super::mapping::ScrollEffects;
use super::transition::MetadataElement;

pub trait HeroSurface {
    /// Canvas size in pixels, or `None` when there is nothing to draw on
    fn canvas_size(&self) -> Option<(u32, u32)> {
        None
    }

    /// Draw `frame` cover-fitted over the whole canvas
    fn draw_frame(&mut self, _index: usize, _frame: &Frame) {}

    fn show_loader(&mut self) {}

    fn set_progress(&mut self, _percent: u8) {}

    fn hide_loader(&mut self) {}

    fn set_mini_loader(&mut self, _visible: bool) {}

    fn set_name(&mut self, _text: &str) {}

    fn set_subtitle(&mut self, _text: &str) {}

    fn set_description(&mut self, _text: &str) {}

    /// 1-based, zero-padded position of the variant ("01")
    fn set_index(&mut self, _label: &str) {}

    /// Accent colour as written in the site data, usually `#rrggbb`
    fn set_accent(&mut self, _color: &str) {}

    /// `None` hides the story button
    fn set_story_link(&mut self, _target: Option<&str>) {}

    /// Previous/next controls and the index indicator
    fn set_nav_visible(&mut self, _visible: bool) {}

    fn set_element_visible(&mut self, _element: MetadataElement, _visible: bool) {}

    fn apply_scroll_effects(&mut self, _effects: ScrollEffects) {}
}
