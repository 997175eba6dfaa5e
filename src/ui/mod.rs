use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod menu;
pub mod widgets;

use crate::app::{App, Focus, InputMode, StatusLevel};
use crate::core::Module;
use crate::domain::nav::BreadcrumbItem;
use widgets::MenuSkeleton;

const SKELETON_ROWS: u16 = 8;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_sidebar(f, areas.sidebar, app);
    app.pages.render(f, areas.content, &app.ctx);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
    app.palette.render(f, areas.size, &app.ctx);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Dineboard",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.page_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let left = Paragraph::new(vec![title, breadcrumb_line(&app.breadcrumb())])
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_lines = vec![
        Line::from(vec![
            Span::styled("Location ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.ctx.location_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Search ", Style::default().fg(Color::DarkGray)),
            Span::raw("Ctrl+K"),
        ]),
    ];
    let right = Paragraph::new(right_lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn breadcrumb_line(trail: &[BreadcrumbItem]) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, item) in trail.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }
        let style = if item.is_active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(item.title.clone(), style));
    }
    Line::from(spans)
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Menu")
        .border_style(border_style);

    if !app.menu.is_loaded() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(MenuSkeleton::new(SKELETON_ROWS), inner);
        return;
    }

    let rows = app.menu_rows();
    let viewport = area.height.saturating_sub(2) as usize;
    let offset = app.sidebar_offset.min(rows.len().saturating_sub(viewport.max(1)));
    // Only highlight the cursor when it is in view so the list keeps our offset
    let selected = (app.focus == Focus::Sidebar
        && app.cursor >= offset
        && app.cursor < offset + viewport)
        .then_some(app.cursor);

    let list = List::new(menu::row_items(&rows))
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Route ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_path)),
        Span::styled("Open ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.menu.expanded_sections().len())),
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(focus_label(app.focus)),
    ];
    if app.menu.has_pending_scroll() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("saving…", Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn focus_label(focus: Focus) -> &'static str {
    match focus {
        Focus::Sidebar => "Menu",
        Focus::Content => "Page",
        Focus::Command => "Command",
    }
}

fn command_hint(input: &str) -> Option<&'static str> {
    let cmd = input.split_whitespace().next().unwrap_or("");
    match cmd {
        "go" | "open" | "cd" => Some("go <path>  e.g. go /labor/stability"),
        "location" | "loc" => Some("location <id>  (no id cycles)"),
        "reset-menu" | "reset" => Some("forget expanded sections and scroll"),
        "back" | "b" => Some("previous page"),
        "home" => Some("dashboard"),
        _ => None,
    }
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("go | back | home | location | reset-menu | help | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {hint_text}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let pairs = [
        ("Enter", "open"),
        ("←/→", "fold"),
        ("Tab", "focus"),
        ("Ctrl+K", "search"),
        ("L", "location"),
        (":", "command"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Menu"),
        Line::from("  j / k      Move cursor"),
        Line::from("  Enter      Open page / fold section"),
        Line::from("  Space      Same as Enter"),
        Line::from("  ← / →      Collapse / expand"),
        Line::from("  PgUp/PgDn  Scroll menu"),
        Line::from("  Mouse      Scroll + click"),
        Line::from(""),
        Line::from("Shell"),
        Line::from("  Tab        Switch menu / page focus"),
        Line::from("  Ctrl+K /   Search menu"),
        Line::from("  :          Command bar"),
        Line::from("  L          Cycle location"),
        Line::from("  Backspace  Previous page"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :go /financial/revenue"),
        Line::from("  :location gurgaon-cyber"),
        Line::from("  :reset-menu"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::MemoryBackend;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_skeleton_before_load() {
        let app = App::new(&Config::default(), Box::new(MemoryBackend::new()));
        let text = screen_text(&app);
        assert!(text.contains("░░"));
        assert!(!text.contains("Labor Management"));
    }

    #[test]
    fn test_breadcrumb_in_header() {
        let mut app = App::new(&Config::default(), Box::new(MemoryBackend::new()));
        app.load_menu_state();
        app.navigate("/financial/revenue");
        let text = screen_text(&app);
        assert!(text.contains("Dashboard > Financial Performance > Revenue & Sales"));
        assert!(text.contains("Revenue & Sales analytics will be implemented here"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert_eq!(inner.width, 60);
        assert!(inner.x >= 20 && inner.y >= 7);
    }
}
