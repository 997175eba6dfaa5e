use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::{Action, Command, Context, NavigateTarget, NotifyLevel};
use crate::domain::nav::{
    build_trail, flatten, normalize_path, BreadcrumbItem, MenuRow, NavTree, RouteLabels, RowKind,
    SearchIndex,
};
use crate::modules::location::LocationSelector;
use crate::modules::pages::PageView;
use crate::modules::palette::{is_palette_shortcut, CommandPalette};
use crate::store::{MenuStateStore, StorageBackend};

const STATUS_TTL: Duration = Duration::from_secs(3);
const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub type MenuStore = MenuStateStore<Box<dyn StorageBackend>>;

pub struct App {
    pub tree: NavTree,
    pub labels: RouteLabels,
    pub menu: MenuStore,
    pub max_depth: usize,

    pub current_path: String,
    history: Vec<String>,

    // Sidebar
    pub cursor: usize,
    pub sidebar_offset: usize,
    pub sidebar_viewport: usize,

    pub focus: Focus,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub palette: CommandPalette,
    pub pages: PageView,
    pub location: LocationSelector,

    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    pub ctx: Context,
}

impl App {
    pub fn new(config: &Config, backend: Box<dyn StorageBackend>) -> Self {
        let mut labels = RouteLabels::restaurant_default();
        labels.extend(config.labels.clone());

        let menu = MenuStateStore::with_options(
            backend,
            config.storage.key.clone(),
            config.menu.scroll_debounce(),
        );

        let mut app = Self {
            tree: NavTree::restaurant_default(),
            labels,
            menu,
            max_depth: config.menu.max_depth,
            current_path: "/".to_string(),
            history: Vec::new(),
            cursor: 0,
            sidebar_offset: 0,
            sidebar_viewport: 1,
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            palette: CommandPalette::new(SearchIndex::restaurant_default()),
            pages: PageView::new(),
            location: LocationSelector::from_config(&config.locations),
            status: None,
            help_open: false,
            should_quit: false,
            ctx: Context::new(),
        };
        app.sync_context();
        app
    }

    /// Rehydrates the sidebar from storage and restores its scroll offset
    pub fn load_menu_state(&mut self) {
        self.menu.load();
        self.sidebar_offset = usize::try_from(self.menu.scroll_position()).unwrap_or(usize::MAX);
        self.clamp_sidebar();
        self.focus_current_row();
        info!(
            expanded = self.menu.expanded_sections().len(),
            offset = self.sidebar_offset,
            "menu state ready"
        );
    }

    pub fn sync_context(&mut self) {
        self.ctx.current_path = self.current_path.clone();
        self.ctx.page_title = self.labels.title_for(&self.current_path);
        self.ctx.location_name = self.location.current().name.clone();
        self.ctx.location_count = self.location.outlet_count();
    }

    pub fn breadcrumb(&self) -> Vec<BreadcrumbItem> {
        build_trail(&self.current_path, &self.labels)
    }

    pub fn page_title(&self) -> &str {
        &self.ctx.page_title
    }

    pub fn menu_rows(&self) -> Vec<MenuRow> {
        flatten(
            &self.tree,
            |key| self.menu.is_expanded(key),
            &self.current_path,
            self.max_depth,
        )
    }

    pub fn selected_row(&self) -> Option<MenuRow> {
        self.menu_rows().into_iter().nth(self.cursor)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // Navigation

    pub fn navigate(&mut self, path: &str) {
        let target = normalize_path(path);
        if target == self.current_path {
            return;
        }
        let previous = std::mem::replace(&mut self.current_path, target);
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.sync_context();
        debug!(path = %self.current_path, "navigated");
    }

    pub fn back(&mut self) {
        match self.history.pop() {
            Some(previous) => {
                self.current_path = previous;
                self.sync_context();
            }
            None => self.set_status("No previous page", StatusLevel::Warn),
        }
    }

    pub fn home(&mut self) {
        self.navigate("/");
    }

    // Sidebar

    /// Sections toggle, links navigate and become the selected item
    pub fn activate_row(&mut self, index: usize) {
        let Some(row) = self.menu_rows().into_iter().nth(index) else {
            return;
        };
        self.cursor = index;
        match row.kind {
            RowKind::Section { key, .. } => self.toggle_section(&key),
            RowKind::Link { path, .. } => {
                self.menu.set_selected_item(Some(path.clone()));
                self.navigate(&path);
            }
            RowKind::Header => {}
        }
    }

    pub fn activate_selected(&mut self) {
        self.activate_row(self.cursor);
    }

    pub fn expand_selected(&mut self) {
        if let Some(RowKind::Section {
            key,
            expanded: false,
        }) = self.selected_row().map(|row| row.kind)
        {
            self.toggle_section(&key);
        }
    }

    /// Collapses an open section, or jumps to the parent of a nested row
    pub fn collapse_selected(&mut self) {
        let rows = self.menu_rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        if let RowKind::Section {
            key,
            expanded: true,
        } = &row.kind
        {
            let key = key.clone();
            self.toggle_section(&key);
            return;
        }
        if row.depth == 0 {
            return;
        }
        if let Some(parent) = rows[..self.cursor]
            .iter()
            .rposition(|candidate| candidate.depth < row.depth)
        {
            self.move_cursor_to(parent);
        }
    }

    /// Row count changes, so the cursor and viewport are pulled back in range
    fn toggle_section(&mut self, key: &str) {
        self.menu.toggle_section(key);
        self.clamp_cursor();
        self.reclamp_sidebar();
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.menu_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = if down {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.move_cursor_to(next);
    }

    pub fn move_cursor_to(&mut self, index: usize) {
        self.cursor = index;
        self.clamp_cursor();
        let viewport = self.sidebar_viewport.max(1);
        if self.cursor < self.sidebar_offset {
            self.scroll_sidebar_to(self.cursor, Instant::now());
        } else if self.cursor >= self.sidebar_offset + viewport {
            self.scroll_sidebar_to(self.cursor + 1 - viewport, Instant::now());
        }
    }

    pub fn scroll_sidebar(&mut self, rows: isize, now: Instant) {
        let target = self.sidebar_offset.saturating_add_signed(rows);
        self.scroll_sidebar_to(target, now);
    }

    /// Moves the viewport and schedules a debounced write of the offset
    pub fn scroll_sidebar_to(&mut self, offset: usize, now: Instant) {
        let before = self.sidebar_offset;
        self.sidebar_offset = offset;
        self.clamp_sidebar();
        if self.sidebar_offset != before {
            self.menu.set_scroll_position(self.sidebar_offset as u64, now);
        }
    }

    fn max_sidebar_offset(&self) -> usize {
        self.menu_rows()
            .len()
            .saturating_sub(self.sidebar_viewport.max(1))
    }

    fn clamp_sidebar(&mut self) {
        self.sidebar_offset = self.sidebar_offset.min(self.max_sidebar_offset());
    }

    /// Keeps the persisted offset one the sidebar can actually show
    fn reclamp_sidebar(&mut self) {
        self.scroll_sidebar_to(self.sidebar_offset, Instant::now());
    }

    fn clamp_cursor(&mut self) {
        let len = self.menu_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Puts the cursor on the row for the current route when it is visible
    fn focus_current_row(&mut self) {
        if let Some(index) = self.menu_rows().iter().position(|row| row.is_active()) {
            self.cursor = index;
        }
    }

    pub fn set_viewport(&mut self, rows: usize) {
        self.sidebar_viewport = rows.max(1);
        self.reclamp_sidebar();
    }

    pub fn reset_menu_state(&mut self) {
        self.menu.clear();
        self.cursor = 0;
        self.sidebar_offset = 0;
        self.set_status("Menu state reset", StatusLevel::Info);
    }

    pub fn cycle_location(&mut self, forward: bool) {
        self.location.cycle(forward);
        self.sync_context();
        self.set_status(
            format!("Location: {}", self.location.current().name),
            StatusLevel::Info,
        );
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content | Focus::Command => Focus::Sidebar,
        };
    }

    // Overlays

    pub fn open_palette(&mut self) {
        self.palette.open();
    }

    /// Opens the palette for Ctrl+K or `/` unless the command bar has the keyboard
    pub fn try_palette_shortcut(&mut self, key: &KeyEvent) -> bool {
        if !is_palette_shortcut(key, self.input_mode == InputMode::Command) {
            return false;
        }
        self.apply_action(Action::OpenPalette);
        true
    }

    pub fn close_overlays(&mut self) {
        self.palette.close();
        self.help_open = false;
    }

    // Command bar

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.focus = Focus::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.focus = Focus::Sidebar;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }
        let cmd = crate::core::parse_command(&input);
        let action = self.execute_command(&cmd);
        self.exit_command();
        self.command.last = Some(input);
        self.apply_action(action);
    }

    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Go(path) => Action::Navigate(NavigateTarget::Path(path.clone())),
            Command::Back => Action::Navigate(NavigateTarget::Back),
            Command::Home => Action::Navigate(NavigateTarget::Home),
            Command::Location(Some(id)) => {
                if self.location.select(id) {
                    self.sync_context();
                    Action::Notify(
                        format!("Location: {}", self.location.current().name),
                        NotifyLevel::Info,
                    )
                } else {
                    Action::Notify(format!("Unknown location: {id}"), NotifyLevel::Warn)
                }
            }
            Command::Location(None) => {
                self.cycle_location(true);
                Action::None
            }
            Command::ResetMenu => Action::ResetMenuState,
            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,
            Command::Unknown(raw) => {
                Action::Notify(format!("Unknown command: {raw}"), NotifyLevel::Warn)
            }
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(NavigateTarget::Back) => self.back(),
            Action::Navigate(NavigateTarget::Home) => self.home(),
            Action::Navigate(NavigateTarget::Path(path)) => self.navigate(&path),
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::OpenPalette => self.open_palette(),
            Action::CloseOverlay => self.close_overlays(),
            Action::ResetMenuState => self.reset_menu_state(),
            Action::Quit => self.should_quit = true,
        }
    }

    // Status

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    /// Fires the scroll debounce once quiet and expires stale status text
    pub fn on_tick(&mut self, now: Instant) {
        self.menu.poll(now);
        if let Some(status) = self.status.as_ref() {
            if now.saturating_duration_since(status.since) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Writes anything still pending before exit
    pub fn shutdown(&mut self) {
        self.menu.flush();
        info!("shutting down");
    }
}
