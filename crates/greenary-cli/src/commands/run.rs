use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tracing::info;

use greenary_core::hero::{frame_source_for, VariantSelector};
use greenary_core::AppConfig;
use greenary_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    widgets::{CatalogWidget, ContactMenuWidget, HeroWidget, StatusBarWidget},
};

use super::load_site;

pub async fn run(config: Arc<AppConfig>, selector: VariantSelector, animate: bool) -> Result<()> {
    let site = load_site(&config)?;
    let source = frame_source_for(&config.hero)?;
    info!(
        "Starting storefront with {} slides and {} products",
        site.hero.slides.len(),
        site.products.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Greenary Organics"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), site, &selector, source, animate);

    // The canvas must have a size before the first preload is requested
    let size = terminal.size()?;
    app.resize(size.width, size.height.saturating_sub(1));
    app.start();

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);
    let mut needs_fast_update = false;

    let result = loop {
        let now = Instant::now();
        app.drain(now);
        app.tick(now);

        if let Err(e) = terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());
            let content = layout[0];

            HeroWidget::render(frame, content, &mut app);

            // The catalog slides up over the hero once the scroll passes its top
            let top = app.catalog_top();
            let (y, offset) = if app.scroll < top {
                (top - app.scroll, 0)
            } else {
                (0, app.scroll - top)
            };
            if y < content.height {
                let area = Rect::new(
                    content.x,
                    content.y + y,
                    content.width,
                    content.height - y,
                );
                CatalogWidget::render(frame, area, &app, offset, now);
            }

            if app.contact_open {
                ContactMenuWidget::render(frame, content, &app);
            }
            StatusBarWidget::render(frame, layout[1], &app);
        }) {
            break Err(e.into());
        }

        // Handle events (faster tick rate while something is animating)
        let event = if needs_fast_update {
            event_handler.next_animation()
        } else {
            event_handler.next()
        };
        match event {
            Ok(Some(AppEvent::Key(key))) => {
                let action = handle_key_event(key, &app);
                if action != Action::None {
                    app.status_message = None;
                }
                app.apply(action, Instant::now());
            }
            Ok(Some(AppEvent::Mouse(mouse))) => {
                let action = handle_mouse_event(mouse, &app);
                app.apply(action, Instant::now());
            }
            Ok(Some(AppEvent::Resize(width, height))) => {
                app.resize(width, height.saturating_sub(1));
            }
            Ok(Some(AppEvent::Tick)) | Ok(None) => {}
            Err(e) => break Err(e),
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
