//! Shell flows driven through the App without a terminal

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dineboard::app::{App, StatusLevel};
use dineboard::config::{self, Config};
use dineboard::core::{parse_command, Action, Module, NavigateTarget};
use dineboard::store::{MemoryBackend, MenuState, MENU_STATE_KEY};

fn app_with(backend: MemoryBackend) -> App {
    let mut app = App::new(&Config::default(), Box::new(backend));
    app.load_menu_state();
    app
}

fn row_index(app: &App, title: &str) -> usize {
    app.menu_rows()
        .iter()
        .position(|row| row.title == title)
        .unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_persisted_sections_restore_on_load() {
    let record = MenuState {
        expanded_sections: vec!["Digital & Aggregator-0".to_string()],
        selected_item: Some("/digital/aggregator".to_string()),
        scroll_position: 0,
    };
    let raw = record.to_json().unwrap();
    let app = app_with(MemoryBackend::seeded(MENU_STATE_KEY, &raw));

    let titles: Vec<String> = app.menu_rows().into_iter().map(|row| row.title).collect();
    assert!(titles.contains(&"Aggregator Operations".to_string()));
    assert!(!titles.contains(&"Cost Metrics".to_string()));
    assert_eq!(app.menu.selected_item(), Some("/digital/aggregator"));
}

#[test]
fn test_palette_commit_navigates() {
    let mut app = app_with(MemoryBackend::new());
    app.open_palette();
    for ch in "zomato".chars() {
        let action = app.palette.handle_key(key(KeyCode::Char(ch)), &app.ctx);
        app.apply_action(action);
    }
    let action = app.palette.handle_key(key(KeyCode::Enter), &app.ctx);
    app.apply_action(action);

    assert!(!app.palette.is_open());
    assert_eq!(app.current_path, "/digital/aggregator");
    let trail: Vec<String> = app.breadcrumb().into_iter().map(|item| item.title).collect();
    assert_eq!(
        trail,
        vec!["Dashboard", "Digital & Aggregator", "Aggregator Operations"]
    );
}

#[test]
fn test_alert_opens_linked_page() {
    let mut app = app_with(MemoryBackend::new());
    let action = app.pages.handle_key(key(KeyCode::Down), &app.ctx);
    app.apply_action(action);
    let action = app.pages.handle_key(key(KeyCode::Enter), &app.ctx);
    assert_eq!(
        action,
        Action::Navigate(NavigateTarget::Path("/labor/stability".to_string()))
    );
    app.apply_action(action);
    assert_eq!(app.page_title(), "Workforce Stability");
}

#[test]
fn test_commands_drive_navigation() {
    let mut app = app_with(MemoryBackend::new());
    for input in ["go quality/safety", "open /reports/builder", "back"] {
        let action = app.execute_command(&parse_command(input));
        app.apply_action(action);
    }
    assert_eq!(app.current_path, "/quality/safety");

    let action = app.execute_command(&parse_command("home"));
    app.apply_action(action);
    assert_eq!(app.current_path, "/");

    let action = app.execute_command(&parse_command("quit"));
    app.apply_action(action);
    assert!(app.should_quit);
}

#[test]
fn test_reset_menu_clears_storage() {
    let mut app = app_with(MemoryBackend::new());
    let reports = row_index(&app, "Reports");
    app.activate_row(reports);
    assert!(app.menu.is_expanded("Reports-0"));

    let action = app.execute_command(&parse_command("reset-menu"));
    app.apply_action(action);
    assert!(app.menu.expanded_sections().is_empty());
    assert_eq!(app.cursor, 0);
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));
}

#[test]
fn test_location_cycle_updates_overview_scope() {
    let mut app = app_with(MemoryBackend::new());
    assert_eq!(app.ctx.location_count, 6);
    app.cycle_location(true);
    assert_eq!(app.ctx.location_count, 1);
    assert_eq!(app.ctx.location_name, "Gurgaon - MG Road");
}

#[test]
fn test_configured_labels_and_locations() {
    let config = config::parse(
        r#"
[labels]
"/reports" = "Report Centre"

[[locations]]
id = "pune-kp"
name = "Pune - Koregaon Park"
"#,
    )
    .unwrap();
    let mut app = App::new(&config, Box::new(MemoryBackend::new()));
    app.load_menu_state();
    app.navigate("/reports/exports");
    assert_eq!(app.breadcrumb()[1].title, "Report Centre");
    assert_eq!(app.ctx.location_count, 1);
}

#[test]
fn test_sidebar_scroll_settles_after_quiet_period() {
    let mut app = app_with(MemoryBackend::new());
    app.set_viewport(4);
    let start = Instant::now();
    app.scroll_sidebar(1, start);
    app.scroll_sidebar(1, start + Duration::from_millis(20));
    app.scroll_sidebar(1, start + Duration::from_millis(40));
    assert_eq!(app.sidebar_offset, 3);

    app.on_tick(start + Duration::from_millis(100));
    assert_eq!(app.menu.scroll_position(), 0);
    app.on_tick(start + Duration::from_millis(150));
    assert_eq!(app.menu.scroll_position(), 3);
    assert!(!app.menu.has_pending_scroll());
}

#[test]
fn test_shutdown_flushes_pending_scroll() {
    let mut app = app_with(MemoryBackend::new());
    app.set_viewport(2);
    app.scroll_sidebar(5, Instant::now());
    app.shutdown();
    assert_eq!(app.menu.scroll_position(), 5);
}

#[test]
fn test_collapse_pulls_sidebar_offset_back_in_range() {
    let mut app = app_with(MemoryBackend::new());
    app.set_viewport(5);
    app.activate_row(row_index(&app, "Settings"));
    app.activate_row(row_index(&app, "Reports"));
    assert_eq!(app.menu_rows().len(), 17);

    app.scroll_sidebar(100, Instant::now());
    assert_eq!(app.sidebar_offset, 12);

    app.activate_row(row_index(&app, "Settings"));
    app.activate_row(row_index(&app, "Reports"));
    let rows = app.menu_rows().len();
    assert_eq!(rows, 11);
    assert!(app.sidebar_offset <= rows - 5);
    assert_eq!(app.sidebar_offset, 6);

    app.shutdown();
    assert_eq!(app.menu.scroll_position(), 6);
}

#[test]
fn test_growing_viewport_resets_sidebar_offset() {
    let mut app = app_with(MemoryBackend::new());
    app.set_viewport(3);
    app.scroll_sidebar(100, Instant::now());
    assert_eq!(app.sidebar_offset, 8);

    app.set_viewport(20);
    assert_eq!(app.sidebar_offset, 0);
    app.shutdown();
    assert_eq!(app.menu.scroll_position(), 0);
}

#[test]
fn test_palette_shortcut_ignored_in_command_bar() {
    let mut app = app_with(MemoryBackend::new());
    let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);

    app.enter_command();
    assert!(!app.try_palette_shortcut(&ctrl_k));
    assert!(!app.try_palette_shortcut(&key(KeyCode::Char('/'))));
    assert!(!app.palette.is_open());

    app.exit_command();
    assert!(app.try_palette_shortcut(&ctrl_k));
    assert!(app.palette.is_open());
}
