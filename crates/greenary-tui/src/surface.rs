use greenary_core::hero::{Frame, HeroSurface, MetadataElement, ScrollEffects};

/// Hero state as the terminal draws it. The scrubber writes here; the
/// hero widget reads it back every frame.
#[derive(Debug, Clone)]
pub struct TuiHeroSurface {
    /// Canvas in pixels: one column per cell, two pixels per row (half blocks)
    canvas: Option<(u32, u32)>,
    pub frame: Option<(usize, Frame)>,
    pub loader_visible: bool,
    pub progress: u8,
    pub mini_loader: bool,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub index: String,
    pub accent: String,
    pub story_link: Option<String>,
    pub nav_visible: bool,
    hidden: [bool; 4],
    pub effects: ScrollEffects,
}

impl TuiHeroSurface {
    /// `animate = false` gives a surface without a canvas
    pub fn new(animate: bool) -> Self {
        Self {
            canvas: animate.then_some((0, 0)),
            frame: None,
            loader_visible: false,
            progress: 0,
            mini_loader: false,
            name: String::new(),
            subtitle: String::new(),
            description: String::new(),
            index: String::new(),
            accent: String::new(),
            story_link: None,
            nav_visible: true,
            hidden: [false; 4],
            effects: ScrollEffects::at(0.0, 1.0),
        }
    }

    /// Track the terminal size in cells
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if let Some(canvas) = self.canvas.as_mut() {
            *canvas = (cols as u32, rows as u32 * 2);
        }
    }

    pub fn is_visible(&self, element: MetadataElement) -> bool {
        !self.hidden[slot(element)]
    }
}

fn slot(element: MetadataElement) -> usize {
    match element {
        MetadataElement::Name => 0,
        MetadataElement::Subtitle => 1,
        MetadataElement::Description => 2,
        MetadataElement::StoryLink => 3,
    }
}

impl HeroSurface for TuiHeroSurface {
    fn canvas_size(&self) -> Option<(u32, u32)> {
        self.canvas
    }

    fn draw_frame(&mut self, index: usize, frame: &Frame) {
        self.frame = Some((index, frame.clone()));
    }

    fn show_loader(&mut self) {
        self.loader_visible = true;
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress = percent;
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

    fn set_subtitle(&mut self, text: &str) {
        self.subtitle = text.to_string();
    }

    fn set_description(&mut self, text: &str) {
        self.description = text.to_string();
    }

    fn set_index(&mut self, label: &str) {
        self.index = label.to_string();
    }

    fn set_accent(&mut self, color: &str) {
        self.accent = color.to_string();
    }

    fn set_story_link(&mut self, target: Option<&str>) {
        self.story_link = target.map(str::to_string);
    }

    fn set_nav_visible(&mut self, visible: bool) {
        self.nav_visible = visible;
    }

    fn set_element_visible(&mut self, element: MetadataElement, visible: bool) {
        self.hidden[slot(element)] = !visible;
    }

    fn apply_scroll_effects(&mut self, effects: ScrollEffects) {
        self.effects = effects;
    }
}
