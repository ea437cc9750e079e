use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PrevVariant,
    NextVariant,
    ScrollDown,
    ScrollUp,
    WheelDown,
    WheelUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    JumpToCatalog,
    NextCard,
    PrevCard,
    Enquire,      // e/Enter: WhatsApp enquiry for the selected card
    OpenProduct,  // o: product page of the selected card
    OpenStory,    // s: story page of the active variant
    ToggleTheme,
    ToggleContact,
    CloseContact,
    OpenContact,
    // Horizontal drag over the hero, in columns
    SwipeStart(u16),
    SwipeEnd(u16),
    /// Drag released outside the hero
    SwipeCancel,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.contact_open {
        return handle_contact_menu(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Variant switching
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevVariant,
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextVariant,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::PageDown, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::PageDown,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::PageDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::PageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::JumpToCatalog,

        // Cards
        (KeyCode::Tab, _) | (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextCard,
        (KeyCode::BackTab, _) | (KeyCode::Char('N'), _) => Action::PrevCard,
        (KeyCode::Enter, _) | (KeyCode::Char('e'), KeyModifiers::NONE) => Action::Enquire,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenProduct,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::OpenStory,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Char('w'), KeyModifiers::NONE) => Action::ToggleContact,

        _ => Action::None,
    }
}

/// Keys while the floating contact menu is open
fn handle_contact_menu(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('w') => Action::OpenContact,
        KeyCode::Esc | KeyCode::Char('q') => Action::CloseContact,
        _ => Action::None,
    }
}

/// Wheel scrolls the page; a left-button drag over the hero is a swipe
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::WheelDown,
        MouseEventKind::ScrollUp => Action::WheelUp,
        MouseEventKind::Down(MouseButton::Left) if app.hero_contains(mouse.row) => {
            Action::SwipeStart(mouse.column)
        }
        MouseEventKind::Up(MouseButton::Left) if app.hero_contains(mouse.row) => {
            Action::SwipeEnd(mouse.column)
        }
        MouseEventKind::Up(MouseButton::Left) => Action::SwipeCancel,
        _ => Action::None,
    }
}
