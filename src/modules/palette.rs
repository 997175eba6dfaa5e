//! Command palette - keyboard-invoked search over menu entries

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module, NavigateTarget};
use crate::domain::nav::{SearchEntry, SearchIndex};
use crate::ui::centered_rect;

/// Ctrl+K, Cmd+K or `/`, unless a text-entry field owns the keyboard
pub fn is_palette_shortcut(key: &KeyEvent, text_entry_focused: bool) -> bool {
    if text_entry_focused {
        return false;
    }
    match key.code {
        KeyCode::Char('k') | KeyCode::Char('K') => key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER),
        KeyCode::Char('/') => !key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[derive(Debug, Clone)]
pub struct CommandPalette {
    index: SearchIndex,
    open: bool,
    query: String,
    selected: usize,
}

impl CommandPalette {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            open: false,
            query: String::new(),
            selected: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Matches in display order (grouped by category)
    pub fn results(&self) -> Vec<&SearchEntry> {
        self.index.ordered(&self.query)
    }

    pub fn selected_entry(&self) -> Option<&SearchEntry> {
        self.results().get(self.selected).copied()
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.results().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if forward {
            (self.selected + 1).min(len - 1)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    fn commit(&mut self) -> Action {
        let Some(path) = self.selected_entry().map(|entry| entry.path.to_string()) else {
            return Action::None;
        };
        self.close();
        Action::Navigate(NavigateTarget::Path(path))
    }
}

impl Module for CommandPalette {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        if !self.open {
            return Action::None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::CloseOverlay
            }
            KeyCode::Enter => self.commit(),
            KeyCode::Up => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char('p') if ctrl => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Char('n') if ctrl => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
                Action::None
            }
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::SUPER) => {
                self.query.push(ch);
                self.selected = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        if !self.open {
            return;
        }
        let popup = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::raw(self.query.clone()),
                Span::styled("_", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(""),
        ];

        let groups = self.index.grouped(&self.query);
        if groups.is_empty() {
            lines.push(Line::from(Span::styled(
                "No results found.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let mut position = 0usize;
        let mut selected_line = 0usize;
        for group in groups {
            lines.push(Line::from(Span::styled(
                group.category.title(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));
            for entry in group.entries {
                let style = if position == self.selected {
                    selected_line = lines.len();
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", entry.title), style),
                    Span::styled(
                        format!("  {}", entry.path),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                position += 1;
            }
        }

        // Keep the selected row on screen for long result lists
        let visible = popup.height.saturating_sub(2) as usize;
        let scroll = selected_line.saturating_sub(visible.saturating_sub(1)) as u16;

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search menu (Enter open, Esc close)")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((scroll, 0));
        frame.render_widget(paragraph, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_query(palette: &mut CommandPalette, text: &str) {
        let ctx = Context::new();
        for ch in text.chars() {
            palette.handle_key(key(KeyCode::Char(ch)), &ctx);
        }
    }

    #[test]
    fn test_shortcuts() {
        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let cmd_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        let slash = key(KeyCode::Char('/'));
        assert!(is_palette_shortcut(&ctrl_k, false));
        assert!(is_palette_shortcut(&cmd_k, false));
        assert!(is_palette_shortcut(&slash, false));
        assert!(!is_palette_shortcut(&key(KeyCode::Char('k')), false));
        assert!(!is_palette_shortcut(&slash, true));
        assert!(!is_palette_shortcut(&ctrl_k, true));
    }

    #[test]
    fn test_commit_navigates_and_closes() {
        let mut palette = CommandPalette::new(SearchIndex::restaurant_default());
        palette.open();
        type_query(&mut palette, "swiggy");
        let action = palette.handle_key(key(KeyCode::Enter), &Context::new());
        assert_eq!(
            action,
            Action::Navigate(NavigateTarget::Path("/digital/aggregator".to_string()))
        );
        assert!(!palette.is_open());
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut palette = CommandPalette::new(SearchIndex::restaurant_default());
        palette.open();
        type_query(&mut palette, "gst");
        let ctx = Context::new();
        palette.handle_key(key(KeyCode::Down), &ctx);
        palette.handle_key(key(KeyCode::Down), &ctx);
        assert_eq!(palette.selected(), 1);
        assert_eq!(
            palette.selected_entry().map(|e| e.title),
            Some("Operational Compliance")
        );
    }

    #[test]
    fn test_enter_without_results_keeps_palette_open() {
        let mut palette = CommandPalette::new(SearchIndex::restaurant_default());
        palette.open();
        type_query(&mut palette, "zzzz");
        assert_eq!(palette.handle_key(key(KeyCode::Enter), &Context::new()), Action::None);
        assert!(palette.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut palette = CommandPalette::new(SearchIndex::restaurant_default());
        palette.open();
        assert!(palette.is_open());
        assert_eq!(
            palette.handle_key(key(KeyCode::Esc), &Context::new()),
            Action::CloseOverlay
        );
        assert!(!palette.is_open());
    }
}
