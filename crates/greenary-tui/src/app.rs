use std::sync::Arc;
use std::time::{Duration, Instant};

use greenary_core::catalog::{CardImage, CatalogRenderer, ProductCard, RevealScheduler};
use greenary_core::hero::{
    cover_crop, decode_frame, Direction, Frame, FrameSource, HeroScrubber, PreloadEvent, PreloadRequest,
    Preloader, VariantSelector,
};
use greenary_core::{AppConfig, PreferenceStore, SiteData};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::event::CardImageResult;
use crate::input::Action;
use crate::surface::TuiHeroSurface;
use crate::theme::Theme;
use crate::widgets::{CanvasCache, THUMB_COLS, THUMB_ROWS};

/// Virtual pixels per terminal row, so scroll thresholds keep their page meaning
pub const ROW_PX: f64 = 16.0;
/// Virtual pixels per terminal column, used for swipe distance
pub const COL_PX: f64 = 8.0;

/// Height of one product card in rows
pub const CARD_HEIGHT: u16 = 10;
/// Catalog heading rows above the first card
pub const CATALOG_HEADER: u16 = 3;
/// Contact footer rows below the last card
pub const CATALOG_FOOTER: u16 = 6;

/// Rows moved per wheel notch
const WHEEL_ROWS: u16 = 3;

/// Row of a card's first line relative to the catalog top
pub fn card_offset(card: usize) -> usize {
    CATALOG_HEADER as usize + CARD_HEIGHT as usize * card
}

/// Page rows are addressed in `u16`; anything further down is unreachable
fn clamp_rows(rows: usize) -> u16 {
    rows.min(u16::MAX as usize) as u16
}

/// Load state of a card thumbnail
#[derive(Debug, Clone)]
pub enum CardImageState {
    Loading,
    Ready(Frame),
    Missing,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub site: SiteData,
    pub theme: Theme,
    pub preferences: PreferenceStore,
    /// Rendered product cards
    pub cards: Vec<ProductCard>,
    pub card_images: Vec<CardImageState>,
    pub reveal: RevealScheduler,
    pub selected_card: usize,
    /// WhatsApp link behind the floating contact button
    pub contact_link: String,
    pub contact_open: bool,
    pub hero: HeroScrubber<TuiHeroSurface>,
    pub canvas_cache: CanvasCache,
    /// Page scroll offset in rows
    pub scroll: u16,
    /// Terminal size in cells
    pub viewport: (u16, u16),
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Accent string last written into the theme
    applied_accent: String,
    renderer: CatalogRenderer,
    source: Arc<dyn FrameSource>,
    preloader: Preloader,
    preload_tx: mpsc::UnboundedSender<PreloadEvent>,
    preload_rx: mpsc::UnboundedReceiver<PreloadEvent>,
    image_tx: mpsc::UnboundedSender<CardImageResult>,
    image_rx: mpsc::UnboundedReceiver<CardImageResult>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        site: SiteData,
        selector: &VariantSelector,
        source: Arc<dyn FrameSource>,
        animate: bool,
    ) -> Self {
        let preferences = PreferenceStore::open(config.preferences_path());
        let mut theme = Theme::for_preference(preferences.effective_theme());

        let hero = HeroScrubber::new(
            site.hero.slides.clone(),
            selector,
            &config.hero,
            TuiHeroSurface::new(animate),
        );
        let applied_accent = hero.surface().accent.clone();
        if !applied_accent.is_empty() {
            theme.set_accent(&applied_accent);
        }

        let renderer = CatalogRenderer::new(&site.contact, &config.catalog);
        let preloader = Preloader::new(Arc::clone(&source), config.hero.max_concurrent_loads);
        let (preload_tx, preload_rx) = mpsc::unbounded_channel();
        let (image_tx, image_rx) = mpsc::unbounded_channel();

        Self {
            contact_link: renderer.floating_link(),
            reveal: RevealScheduler::new(0, Duration::from_millis(config.catalog.reveal_stagger_ms)),
            config,
            site,
            theme,
            preferences,
            cards: Vec::new(),
            card_images: Vec::new(),
            selected_card: 0,
            contact_open: false,
            hero,
            canvas_cache: CanvasCache::default(),
            scroll: 0,
            viewport: (0, 0),
            should_quit: false,
            status_message: None,
            applied_accent,
            renderer,
            source,
            preloader,
            preload_tx,
            preload_rx,
            image_tx,
            image_rx,
        }
    }

    /// Render the catalog and start loading the hero and card images.
    /// Must run inside a tokio runtime.
    pub fn start(&mut self) {
        let count = self
            .renderer
            .render_into(&self.site.products, Some(&mut self.cards));
        info!("Catalog ready with {} products", count);

        self.reveal = RevealScheduler::new(
            count,
            Duration::from_millis(self.config.catalog.reveal_stagger_ms),
        );
        self.card_images = vec![CardImageState::Loading; count];
        for index in 0..count {
            self.load_card_image(index);
        }

        let request = self.hero.begin_preload();
        self.dispatch(request);
    }

    fn dispatch(&self, request: Option<PreloadRequest>) {
        if let Some(request) = request {
            debug!(
                "Dispatching preload of variant {} (generation {})",
                request.variant, request.generation
            );
            self.preloader.spawn(request, self.preload_tx.clone());
        }
    }

    /// Fetch a card image and shrink it to thumbnail pixels
    fn load_card_image(&self, card: usize) {
        let Some(path) = self.cards.get(card).map(|c| c.image.path().to_string()) else {
            return;
        };
        let source = Arc::clone(&self.source);
        let tx = self.image_tx.clone();

        tokio::spawn(async move {
            let result = match source.fetch(&path).await {
                Ok(bytes) => match tokio::task::spawn_blocking(move || {
                    decode_frame(&bytes).map(|image| {
                        cover_crop(&image, THUMB_COLS as u32, THUMB_ROWS as u32 * 2)
                    })
                })
                .await
                {
                    Ok(Ok(image)) => CardImageResult::Success {
                        card,
                        image: Arc::new(image),
                    },
                    Ok(Err(e)) => CardImageResult::Failure {
                        card,
                        error: e.to_string(),
                    },
                    Err(e) => CardImageResult::Failure {
                        card,
                        error: e.to_string(),
                    },
                },
                Err(e) => CardImageResult::Failure {
                    card,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(result);
        });
    }

    /// Apply every completed preload and card image result (non-blocking)
    pub fn drain(&mut self, now: Instant) {
        while let Ok(event) = self.preload_rx.try_recv() {
            self.hero.on_preload_event(event, now);
        }
        while let Ok(result) = self.image_rx.try_recv() {
            self.handle_card_image(result);
        }
    }

    fn handle_card_image(&mut self, result: CardImageResult) {
        match result {
            CardImageResult::Success { card, image } => {
                if let Some(state) = self.card_images.get_mut(card) {
                    *state = CardImageState::Ready(image);
                }
            }
            CardImageResult::Failure { card, error } => {
                let Some(product) = self.cards.get_mut(card) else {
                    return;
                };
                warn!("Image for '{}' failed: {}", product.name, error);

                // Fall back to the placeholder once; a failing placeholder stays empty
                let had_source = matches!(product.image, CardImage::Source(_));
                product.image_failed();
                if had_source {
                    self.load_card_image(card);
                } else if let Some(state) = self.card_images.get_mut(card) {
                    *state = CardImageState::Missing;
                }
            }
        }
    }

    /// Advance timers and reveal cards that came into view
    pub fn tick(&mut self, now: Instant) {
        self.hero.tick(now);
        if self.hero.surface().accent != self.applied_accent {
            self.applied_accent = self.hero.surface().accent.clone();
            if !self.applied_accent.is_empty() {
                self.theme.set_accent(&self.applied_accent);
            }
        }

        let visible: Vec<usize> = self.visible_cards().collect();
        self.reveal.observe(visible, now);
    }

    /// Whether the next frame should come sooner than the idle tick
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.hero.is_animating() || self.reveal.is_animating(now)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.hero.surface_mut().resize(width, height);
        self.hero.on_resize(height as f64 * ROW_PX);
        self.scroll_to(self.scroll);
    }

    /// Rows the hero animation plays over
    pub fn hero_span(&self) -> u16 {
        let rows = self.viewport.1 as f64 * self.config.hero.scroll_window_viewports;
        rows.ceil().clamp(0.0, u16::MAX as f64) as u16
    }

    /// Page row at which the catalog starts
    pub fn catalog_top(&self) -> u16 {
        self.hero_span().saturating_add(self.viewport.1)
    }

    pub fn catalog_height(&self) -> u16 {
        clamp_rows(card_offset(self.cards.len()) + CATALOG_FOOTER as usize)
    }

    pub fn max_scroll(&self) -> u16 {
        self.catalog_top()
            .saturating_add(self.catalog_height())
            .saturating_sub(self.viewport.1)
    }

    /// Page row of a card's first line
    pub fn card_top(&self, card: usize) -> u16 {
        clamp_rows(self.catalog_top() as usize + card_offset(card))
    }

    /// Cards with at least one row on screen
    pub fn visible_cards(&self) -> impl Iterator<Item = usize> + '_ {
        let top = self.scroll;
        let bottom = self.scroll.saturating_add(self.viewport.1);
        (0..self.cards.len()).filter(move |&card| {
            let start = self.card_top(card);
            start < bottom && start.saturating_add(CARD_HEIGHT) > top
        })
    }

    /// Whether a screen row shows the hero rather than the catalog or a popup
    pub fn hero_contains(&self, row: u16) -> bool {
        let hero_rows = self.catalog_top().saturating_sub(self.scroll).min(self.viewport.1);
        !self.contact_open && row < hero_rows
    }

    pub fn scroll_to(&mut self, row: u16) {
        self.scroll = row.min(self.max_scroll());
        self.hero.on_scroll(self.scroll as f64 * ROW_PX);
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        self.scroll_to(target);
    }

    fn select_card(&mut self, card: usize) {
        if self.cards.is_empty() {
            return;
        }
        self.selected_card = card.min(self.cards.len() - 1);
        let top = self.card_top(self.selected_card);
        let bottom = top.saturating_add(CARD_HEIGHT);
        if top < self.scroll || bottom > self.scroll.saturating_add(self.viewport.1) {
            self.scroll_to(top.saturating_sub(1));
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Perform an input action
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PrevVariant => self.switch(Direction::Previous, now),
            Action::NextVariant => self.switch(Direction::Next, now),
            Action::ScrollDown => self.scroll_by(1),
            Action::ScrollUp => self.scroll_by(-1),
            Action::WheelDown => self.scroll_by(WHEEL_ROWS as i32),
            Action::WheelUp => self.scroll_by(-(WHEEL_ROWS as i32)),
            Action::PageDown => self.scroll_by(self.viewport.1 as i32),
            Action::PageUp => self.scroll_by(-(self.viewport.1 as i32)),
            Action::JumpToTop => self.scroll_to(0),
            Action::JumpToBottom => self.scroll_to(self.max_scroll()),
            Action::JumpToCatalog => self.scroll_to(self.catalog_top()),
            Action::NextCard => self.select_card(self.selected_card + 1),
            Action::PrevCard => self.select_card(self.selected_card.saturating_sub(1)),
            Action::Enquire => {
                if let Some(card) = self.cards.get(self.selected_card) {
                    let link = card.enquire().0;
                    self.open_link(&link);
                }
            }
            Action::OpenProduct => {
                if let Some(href) = self.cards.get(self.selected_card).map(|c| c.href.clone()) {
                    self.open_link(&href);
                }
            }
            Action::OpenStory => match self.hero.surface().story_link.clone() {
                Some(link) => self.open_link(&link),
                None => self.set_status("No story for this product"),
            },
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleContact => self.contact_open = !self.contact_open,
            Action::CloseContact => self.contact_open = false,
            Action::OpenContact => {
                let link = self.contact_link.clone();
                self.open_link(&link);
                self.contact_open = false;
            }
            Action::SwipeStart(column) => self.hero.swipe_begin(column as f64 * COL_PX),
            Action::SwipeEnd(column) => {
                let request = self.hero.swipe_end(column as f64 * COL_PX, now);
                self.dispatch(request);
            }
            Action::SwipeCancel => self.hero.swipe_cancel(),
            Action::None => {}
        }
    }

    fn switch(&mut self, direction: Direction, now: Instant) {
        if self.hero.is_story_mode() {
            self.set_status("Story mode: switching disabled");
            return;
        }
        let request = self.hero.switch(direction, now);
        self.dispatch(request);
    }

    fn toggle_theme(&mut self) {
        match self.preferences.toggle_theme() {
            Ok(preference) => {
                self.theme = Theme::for_preference(preference);
                self.applied_accent = self.hero.surface().accent.clone();
                if !self.applied_accent.is_empty() {
                    self.theme.set_accent(&self.applied_accent);
                }
                self.set_status(format!("Theme: {}", preference.as_str()));
            }
            Err(e) => {
                warn!("Failed to save theme: {}", e);
                self.set_status(format!("Failed to save theme: {}", e));
            }
        }
    }

    /// Absolute form of a page link, if it points anywhere
    pub fn resolve_link(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            return None;
        }
        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_string());
        }
        let base = self.config.hero.frame_base.trim();
        if base.starts_with("http://") || base.starts_with("https://") {
            Some(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                href.trim_start_matches('/')
            ))
        } else {
            None
        }
    }

    fn open_link(&mut self, href: &str) {
        match self.resolve_link(href) {
            Some(url) => match open::that(&url) {
                Ok(()) => self.set_status(format!("Opened {}", url)),
                Err(e) => {
                    warn!("Failed to open {}: {}", url, e);
                    self.set_status(format!("Failed to open link: {}", e));
                }
            },
            None => self.set_status(format!("Link: {}", href)),
        }
    }
}
