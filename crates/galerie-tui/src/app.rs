use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use galerie_core::exhibition::{active_from, exhibitions, ActiveExhibition, Exhibition};
use galerie_core::{catalog, AppConfig, AutoScrollSignal};
use ratatui::layout::Rect;

use crate::assets::ImageCache;
use crate::banner::BannerController;
use crate::input::Action;
use crate::lightbox::{Control, Lightbox, ScrollLock};
use crate::scroll::{ScrollAnimator, SectionNavigator};
use crate::sections::{PageLayout, SectionId};
use crate::swipe::SwipeTracker;
use crate::theme::Theme;

/// Interaction mode of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling the page
    Browse,
    /// Header menu open
    Menu,
    /// Artwork lightbox open
    ArtworkViewer,
    /// Exhibition poster lightbox open
    PosterViewer,
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub signal: AutoScrollSignal,
    pub theme: Theme,
    pub exhibitions: Vec<Exhibition>,
    pub artworks: Vec<catalog::Artwork>,
    pub images: ImageCache,

    pub layout: PageLayout,
    pub animator: ScrollAnimator,
    pub navigator: SectionNavigator,
    pub banner: BannerController,

    pub artwork_viewer: Lightbox,
    pub poster_viewer: Lightbox,
    scroll_lock: ScrollLock,
    pub scroll_locked: bool,
    pub swipe: SwipeTracker,

    pub mode: Mode,
    pub menu_index: usize,
    pub gallery_cursor: usize,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub status_message: Option<String>,

    /// Content area of the open overlay, set during render. Clicks outside
    /// it close the overlay.
    pub modal_content_area: Option<Rect>,
    /// Banner row, set during render. Clicking it jumps to the exhibitions
    /// section.
    pub banner_area: Option<Rect>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let config = Arc::new(config);
        let signal = AutoScrollSignal::new();
        let artworks = catalog::artworks();
        let artwork_count = artworks.len();

        Self {
            signal: signal.clone(),
            theme: Theme::default(),
            exhibitions: exhibitions(),
            artworks,
            images: ImageCache::new(config.ui.assets_dir.clone()),
            layout: PageLayout::default(),
            animator: ScrollAnimator::new(config.scroll.clone()),
            navigator: SectionNavigator::new(signal, &config.scroll),
            banner: BannerController::new(config.banner.clone()),
            artwork_viewer: Lightbox::new(artwork_count),
            poster_viewer: Lightbox::new(0),
            scroll_lock: ScrollLock::default(),
            scroll_locked: false,
            swipe: SwipeTracker::new(),
            mode: Mode::Browse,
            menu_index: 0,
            gallery_cursor: 0,
            pending_key: None,
            should_quit: false,
            status_message: None,
            modal_content_area: None,
            banner_area: None,
            config,
        }
    }

    /// Active exhibitions for today, recomputed on every call so a viewer
    /// left open overnight shows the right statuses.
    pub fn active_exhibitions(&self) -> Vec<ActiveExhibition> {
        let today = Local::now().date_naive();
        active_from(self.exhibitions.clone(), today)
    }

    /// Advance all time-driven state. Call once per tick, before drawing.
    pub fn on_tick(&mut self, now: Instant) {
        let max_scroll = self.layout.max_scroll();
        let offset = self.animator.update(max_scroll, now);
        self.navigator.on_tick(&self.animator, now);
        self.banner.set_navigating(self.navigator.is_navigating());

        let active_count = self.active_exhibitions().len();
        self.banner.on_tick(active_count, now);
        self.banner
            .update_scroll_progress(offset, self.layout.viewport_height());

        // A midnight recompute can shrink the active list under an open
        // poster viewer
        if self.mode == Mode::PosterViewer {
            self.poster_viewer.set_item_count(active_count);
            if !self.poster_viewer.is_open() {
                self.close_viewer();
            }
        }

        self.artwork_viewer.on_tick(now);
        self.poster_viewer.on_tick(now);
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        // Any action other than the g prefix clears the pending key and
        // any transient status line
        if action != Action::PendingG {
            self.pending_key = None;
            self.status_message = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::PendingG => self.pending_key = Some('g'),

            Action::ScrollDown => self.user_scroll(1),
            Action::ScrollUp => self.user_scroll(-1),
            Action::ScrollHalfPageDown => self.user_scroll_half_page(true),
            Action::ScrollHalfPageUp => self.user_scroll_half_page(false),
            Action::JumpToTop => {
                if !self.scroll_locked {
                    self.animator.scroll_to(0, self.layout.max_scroll(), now);
                }
            }
            Action::JumpToBottom => {
                if !self.scroll_locked {
                    let max = self.layout.max_scroll();
                    self.animator.scroll_to(max, max, now);
                }
            }

            Action::NavigateSection(section) => self.navigate(section, now),
            Action::BackToTop => self.navigate(SectionId::Home, now),

            Action::ToggleMenu => {
                if self.mode == Mode::Menu {
                    self.close_menu();
                } else if self.mode == Mode::Browse {
                    self.mode = Mode::Menu;
                    self.menu_index = 0;
                    self.banner.set_menu_open(true);
                }
            }
            Action::MoveDown => {
                if self.mode == Mode::Menu {
                    self.menu_index = (self.menu_index + 1) % SectionId::MENU.len();
                }
            }
            Action::MoveUp => {
                if self.mode == Mode::Menu {
                    self.menu_index =
                        (self.menu_index + SectionId::MENU.len() - 1) % SectionId::MENU.len();
                }
            }
            Action::Confirm => {
                if self.mode == Mode::Menu {
                    let section = SectionId::MENU[self.menu_index];
                    self.close_menu();
                    self.navigate(section, now);
                }
            }

            Action::ToggleBanner => self.banner.toggle_dismissed(now),

            Action::GalleryPrev => {
                if !self.artworks.is_empty() {
                    self.gallery_cursor =
                        (self.gallery_cursor + self.artworks.len() - 1) % self.artworks.len();
                }
            }
            Action::GalleryNext => {
                if !self.artworks.is_empty() {
                    self.gallery_cursor = (self.gallery_cursor + 1) % self.artworks.len();
                }
            }

            Action::OpenArtwork => self.open_artwork_viewer(self.gallery_cursor),
            Action::OpenPoster => self.open_poster_viewer(),

            Action::PrevItem => self.step_viewer(crate::swipe::SwipeDirection::Prev),
            Action::NextItem => self.step_viewer(crate::swipe::SwipeDirection::Next),
            Action::FocusNext => {
                if let Some(viewer) = self.current_viewer_mut() {
                    viewer.focus_next();
                }
            }
            Action::FocusPrev => {
                if let Some(viewer) = self.current_viewer_mut() {
                    viewer.focus_prev();
                }
            }
            Action::ActivateControl => self.activate_control(now),

            Action::ExitMode => match self.mode {
                Mode::Menu => self.close_menu(),
                Mode::ArtworkViewer | Mode::PosterViewer => self.close_viewer(),
                Mode::Browse => {}
            },

            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.user_scroll(self.config.scroll.scroll_lines as i32),
            MouseEventKind::ScrollUp => self.user_scroll(-(self.config.scroll.scroll_lines as i32)),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.mode {
                    Mode::ArtworkViewer | Mode::PosterViewer => {
                        let inside = self
                            .modal_content_area
                            .is_some_and(|area| contains(area, mouse.column, mouse.row));
                        if inside {
                            self.swipe.begin(mouse.column, mouse.row);
                        } else {
                            self.close_viewer();
                        }
                    }
                    Mode::Browse => {
                        let on_banner = self
                            .banner_area
                            .is_some_and(|area| contains(area, mouse.column, mouse.row));
                        if on_banner {
                            self.navigate(SectionId::Exhibitions, now);
                        }
                    }
                    Mode::Menu => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.swipe.update(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.finish(mouse.column, mouse.row) {
                    if let Some(viewer) = self.current_viewer_mut() {
                        viewer.swipe(direction, now);
                    }
                }
            }
            _ => {}
        }
    }

    /// Navigate to a section. Closes the menu first so the programmatic
    /// scroll cannot be mistaken for a user scroll that should close it.
    pub fn navigate(&mut self, section: SectionId, now: Instant) {
        if self.mode == Mode::Menu {
            self.close_menu();
        }
        self.banner.set_navigating(true);
        if !self
            .navigator
            .navigate_to(section, &self.layout, &mut self.animator, now)
        {
            self.banner.set_navigating(false);
        }
    }

    fn user_scroll(&mut self, delta: i32) {
        if self.scroll_locked {
            return;
        }
        self.banner
            .on_user_scroll(self.signal.is_active() || self.navigator.is_navigating());
        self.animator.scroll_by(delta, self.layout.max_scroll());
    }

    fn user_scroll_half_page(&mut self, down: bool) {
        if self.scroll_locked {
            return;
        }
        self.banner
            .on_user_scroll(self.signal.is_active() || self.navigator.is_navigating());
        self.animator
            .scroll_half_page(down, self.layout.viewport_height(), self.layout.max_scroll());
    }

    fn close_menu(&mut self) {
        if self.mode == Mode::Menu {
            self.mode = Mode::Browse;
        }
        self.banner.set_menu_open(false);
    }

    pub fn open_artwork_viewer(&mut self, index: usize) {
        if self.artworks.is_empty() {
            return;
        }
        self.artwork_viewer.open(index.min(self.artworks.len() - 1));
        if self.artwork_viewer.is_open() {
            self.mode = Mode::ArtworkViewer;
            self.scroll_locked = self.scroll_lock.acquire(self.scroll_locked);
        }
    }

    pub fn open_poster_viewer(&mut self) {
        let active = self.active_exhibitions();
        if active.is_empty() {
            self.status_message = Some("Žádné aktuální výstavy".to_string());
            return;
        }
        // Rebuilt per open so the count tracks the live active list
        self.poster_viewer = Lightbox::new(active.len());
        self.poster_viewer.open(self.banner.display_index(active.len()));
        self.mode = Mode::PosterViewer;
        self.scroll_locked = self.scroll_lock.acquire(self.scroll_locked);
    }

    pub fn close_viewer(&mut self) {
        match self.mode {
            Mode::ArtworkViewer => self.artwork_viewer.close(),
            Mode::PosterViewer => self.poster_viewer.close(),
            _ => return,
        }
        self.mode = Mode::Browse;
        self.scroll_locked = self.scroll_lock.release();
        self.swipe.reset();
        self.modal_content_area = None;
    }

    pub fn current_viewer(&self) -> Option<&Lightbox> {
        match self.mode {
            Mode::ArtworkViewer => Some(&self.artwork_viewer),
            Mode::PosterViewer => Some(&self.poster_viewer),
            _ => None,
        }
    }

    fn current_viewer_mut(&mut self) -> Option<&mut Lightbox> {
        match self.mode {
            Mode::ArtworkViewer => Some(&mut self.artwork_viewer),
            Mode::PosterViewer => Some(&mut self.poster_viewer),
            _ => None,
        }
    }

    fn step_viewer(&mut self, direction: crate::swipe::SwipeDirection) {
        if let Some(viewer) = self.current_viewer_mut() {
            viewer.step(direction);
        }
    }

    fn activate_control(&mut self, now: Instant) {
        let Some(viewer) = self.current_viewer() else {
            return;
        };
        match viewer.focused_control() {
            Control::Close => self.close_viewer(),
            Control::Prev => self.step_viewer(crate::swipe::SwipeDirection::Prev),
            Control::Next => self.step_viewer(crate::swipe::SwipeDirection::Next),
            Control::Contact => {
                self.close_viewer();
                self.navigate(SectionId::Contact, now);
            }
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(AppConfig::default());
        let mut layout = PageLayout::new(40, 4);
        layout.register(SectionId::Home, 0);
        layout.register(SectionId::About, 50);
        layout.register(SectionId::Exhibitions, 100);
        layout.register(SectionId::Gallery, 150);
        layout.register(SectionId::Contact, 220);
        layout.set_total_height(300);
        app.layout = layout;
        app
    }

    #[test]
    fn test_open_artwork_locks_page_scroll() {
        let mut app = app();
        let now = Instant::now();

        app.handle_action(Action::OpenArtwork, now);
        assert_eq!(app.mode, Mode::ArtworkViewer);
        assert!(app.scroll_locked);

        // Scroll input is swallowed while the overlay is open
        app.handle_action(Action::ScrollDown, now);
        app.on_tick(now);
        assert_eq!(app.animator.current_scroll(), 0);

        app.handle_action(Action::ExitMode, now);
        assert_eq!(app.mode, Mode::Browse);
        assert!(!app.scroll_locked);
    }

    #[test]
    fn test_menu_confirm_navigates() {
        let mut app = app();
        let now = Instant::now();

        app.handle_action(Action::ToggleMenu, now);
        assert_eq!(app.mode, Mode::Menu);
        assert!(app.banner.is_menu_open());

        app.handle_action(Action::MoveDown, now); // Exhibitions
        app.handle_action(Action::Confirm, now);
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.signal.is_active());
        assert_eq!(app.animator.target_scroll(), 96);
    }

    #[test]
    fn test_menu_wraps() {
        let mut app = app();
        let now = Instant::now();
        app.handle_action(Action::ToggleMenu, now);
        app.handle_action(Action::MoveUp, now);
        assert_eq!(app.menu_index, SectionId::MENU.len() - 1);
    }

    #[test]
    fn test_contact_control_closes_and_navigates() {
        let mut app = app();
        let now = Instant::now();

        app.handle_action(Action::OpenArtwork, now);
        // Tab to the contact control: Close -> Prev -> Next -> Contact
        for _ in 0..3 {
            app.handle_action(Action::FocusNext, now);
        }
        assert_eq!(app.artwork_viewer.focused_control(), Control::Contact);

        app.handle_action(Action::ActivateControl, now);
        assert_eq!(app.mode, Mode::Browse);
        assert!(!app.scroll_locked);
        assert!(app.signal.is_active());
        assert_eq!(app.animator.target_scroll(), 216);
    }

    #[test]
    fn test_gallery_cursor_wraps() {
        let mut app = app();
        let now = Instant::now();
        let count = app.artworks.len();

        app.handle_action(Action::GalleryPrev, now);
        assert_eq!(app.gallery_cursor, count - 1);
        app.handle_action(Action::GalleryNext, now);
        assert_eq!(app.gallery_cursor, 0);
    }

    #[test]
    fn test_pending_g_cleared_by_other_actions() {
        let mut app = app();
        let now = Instant::now();

        app.handle_action(Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::ScrollDown, now);
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_poster_viewer_closes_when_active_list_empties() {
        let mut app = app();
        let now = Instant::now();

        // Viewer opened while two exhibitions were active
        app.poster_viewer = Lightbox::new(2);
        app.poster_viewer.open(1);
        app.mode = Mode::PosterViewer;
        app.scroll_locked = app.scroll_lock.acquire(app.scroll_locked);

        // All of them have since ended
        app.exhibitions = Vec::new();
        app.on_tick(now);

        assert_eq!(app.mode, Mode::Browse);
        assert!(!app.poster_viewer.is_open());
        assert!(!app.scroll_locked);
    }

    #[test]
    fn test_navigate_to_unregistered_section_resets_flag() {
        let mut app = app();
        app.layout = PageLayout::new(40, 4); // nothing registered
        app.navigate(SectionId::Gallery, Instant::now());
        assert!(!app.signal.is_active());
        assert!(!app.navigator.is_navigating());
    }
}
