use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use greenary_core::hero::Frame;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_rate: Duration,
}

/// Result of loading a product card image
pub enum CardImageResult {
    Success { card: usize, image: Frame },
    Failure { card: usize, error: String },
}

impl EventHandler {
    /// Poll faster while fades or scroll updates are in flight
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_rate: Duration::from_millis(1000 / u64::from(fps.max(1))),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the animation frame budget
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Wheel or drag
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
