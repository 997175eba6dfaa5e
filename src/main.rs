use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dineboard::app::{App, Focus, InputMode, StatusLevel};
use dineboard::config::{self, BackendKind, Config};
use dineboard::core::Module;
use dineboard::domain::nav::normalize_path;
use dineboard::store::{MemoryBackend, SqliteBackend, StorageBackend};
use dineboard::ui;

#[derive(Debug, Parser)]
#[command(
    name = "dineboard",
    version,
    about = "Dineboard: restaurant analytics navigation shell"
)]
struct Args {
    /// Route to open on start (e.g. /financial/revenue)
    #[arg(long, default_value = "/")]
    path: String,

    /// Config file, overriding the default lookup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep menu state in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Forget persisted menu state on start
    #[arg(long)]
    reset_menu_state: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match args.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    let (backend, backend_warning) = open_backend(&config, args.ephemeral);

    let mut app = App::new(&config, backend);
    app.current_path = normalize_path(&args.path);
    app.sync_context();
    if let Some(warning) = backend_warning {
        app.set_status(warning, StatusLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, args.reset_menu_state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// Logs go to a file because the terminal belongs to the UI
fn init_tracing() {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let filter = std::env::var("DINEBOARD_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn open_backend(config: &Config, ephemeral: bool) -> (Box<dyn StorageBackend>, Option<String>) {
    if ephemeral || config.storage.backend == BackendKind::Memory {
        info!("menu state kept in memory");
        return (Box::new(MemoryBackend::new()), None);
    }
    match open_sqlite() {
        Ok(backend) => (Box::new(backend), None),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "falling back to in-memory menu state");
            (
                Box::new(MemoryBackend::new()),
                Some(format!("Menu state not persisted: {err:#}")),
            )
        }
    }
}

fn open_sqlite() -> Result<SqliteBackend> {
    let path = config::state_db_path().context("no data directory for menu state")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let backend = SqliteBackend::open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok(backend)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    reset_menu_state: bool,
) -> Result<()> {
    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    // First frame shows the menu skeleton until storage has been read
    app.set_viewport(ui::layout::areas(terminal.size()?).sidebar_rows());
    terminal.draw(|f| ui::draw(f, &app))?;
    app.load_menu_state();
    if reset_menu_state {
        app.reset_menu_state();
    }

    loop {
        let areas = ui::layout::areas(terminal.size()?);
        app.set_viewport(areas.sidebar_rows());
        app.sync_context();
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            app.shutdown();
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    // The palette query owns the keyboard while open
    if app.palette.is_open() {
        let action = app.palette.handle_key(key, &app.ctx);
        app.apply_action(action);
        return;
    }

    if app.try_palette_shortcut(&key) {
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => app.toggle_focus(),
        (KeyCode::Char('L'), _) => app.cycle_location(true),
        (KeyCode::Backspace, _) => app.back(),
        (KeyCode::PageUp, _) => {
            let rows = app.sidebar_viewport as isize;
            app.scroll_sidebar(-rows, Instant::now());
        }
        (KeyCode::PageDown, _) => {
            let rows = app.sidebar_viewport as isize;
            app.scroll_sidebar(rows, Instant::now());
        }
        _ => match app.focus {
            Focus::Sidebar => handle_sidebar_key(app, key),
            Focus::Content => {
                let action = app.pages.handle_key(key, &app.ctx);
                app.apply_action(action);
            }
            Focus::Command => {}
        },
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),
        KeyCode::Left | KeyCode::Char('h') => app.collapse_selected(),
        KeyCode::Right | KeyCode::Char('l') => app.expand_selected(),
        KeyCode::Home => app.move_cursor_to(0),
        KeyCode::End => app.move_cursor_to(usize::MAX),
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || app.palette.is_open() || app.input_mode == InputMode::Command {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let areas = ui::layout::areas(size);
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, false),
        _ => {}
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

const WHEEL_ROWS: isize = 3;

fn handle_scroll(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16, up: bool) {
    if rect_contains(areas.sidebar, col, row) {
        let rows = if up { -WHEEL_ROWS } else { WHEEL_ROWS };
        app.scroll_sidebar(rows, Instant::now());
        return;
    }
    if rect_contains(areas.content, col, row) {
        app.focus = Focus::Content;
        let code = if up { KeyCode::Up } else { KeyCode::Down };
        let action = app
            .pages
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE), &app.ctx);
        app.apply_action(action);
    }
}

fn handle_click(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16) {
    if rect_contains(areas.sidebar, col, row) {
        let inner = rect_inner(areas.sidebar);
        if !rect_contains(inner, col, row) || !app.menu.is_loaded() {
            return;
        }
        app.focus = Focus::Sidebar;
        let clicked = app.sidebar_offset + (row - inner.y) as usize;
        app.activate_row(clicked);
        return;
    }

    if rect_contains(areas.content, col, row) {
        app.focus = Focus::Content;
    }
}
