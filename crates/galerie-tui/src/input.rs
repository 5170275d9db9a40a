use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::sections::SectionId;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NavigateSection(SectionId),
    ToggleMenu,
    ToggleBanner,
    BackToTop,
    MoveUp,   // Menu or gallery cursor
    MoveDown, // Menu or gallery cursor
    GalleryPrev,
    GalleryNext,
    OpenArtwork,   // Enter: open the artwork under the cursor
    OpenPoster,    // 'p': open the poster of the banner exhibition
    PrevItem,      // Left/h inside a viewer
    NextItem,      // Right/l inside a viewer
    FocusNext,     // Tab inside a viewer
    FocusPrev,     // Shift+Tab inside a viewer
    ActivateControl, // Enter on the focused viewer control
    ExitMode,
    Confirm,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Overlays own the keyboard while open
    match app.mode {
        Mode::Menu => return handle_menu_mode(key),
        Mode::ArtworkViewer | Mode::PosterViewer => return handle_viewer_mode(key),
        Mode::Browse => {}
    }

    // Browse mode keybindings
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Direct section jumps
        (KeyCode::Char('1'), KeyModifiers::NONE) => Action::NavigateSection(SectionId::Home),
        (KeyCode::Char('2'), KeyModifiers::NONE) => Action::NavigateSection(SectionId::About),
        (KeyCode::Char('3'), KeyModifiers::NONE) => {
            Action::NavigateSection(SectionId::Exhibitions)
        }
        (KeyCode::Char('4'), KeyModifiers::NONE) => Action::NavigateSection(SectionId::Gallery),
        (KeyCode::Char('5'), KeyModifiers::NONE) => Action::NavigateSection(SectionId::Contact),

        // Header controls
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::ToggleBanner,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::BackToTop,

        // Gallery cursor and viewers
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::GalleryPrev,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::GalleryNext,
        (KeyCode::Left, KeyModifiers::NONE) => Action::GalleryPrev,
        (KeyCode::Right, KeyModifiers::NONE) => Action::GalleryNext,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::OpenArtwork,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::OpenPoster,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::None,

        _ => Action::None,
    }
}

fn handle_menu_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            Action::MoveDown
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            Action::MoveUp
        }
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Confirm,
        (KeyCode::Esc, KeyModifiers::NONE)
        | (KeyCode::Char('q'), KeyModifiers::NONE)
        | (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ExitMode,
        _ => Action::None,
    }
}

fn handle_viewer_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            Action::ExitMode
        }
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::FocusPrev,
        (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            Action::PrevItem
        }
        (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            Action::NextItem
        }
        (KeyCode::Enter, KeyModifiers::NONE) => Action::ActivateControl,
        _ => Action::None,
    }
}
