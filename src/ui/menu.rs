//! Sidebar rows

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::domain::nav::{MenuRow, RowKind};

const INDENT: &str = "  ";

pub fn row_line(row: &MenuRow) -> Line<'static> {
    let mut spans = vec![Span::raw(INDENT.repeat(row.depth))];

    let marker = match &row.kind {
        RowKind::Section { expanded: true, .. } => "▾ ",
        RowKind::Section { expanded: false, .. } => "▸ ",
        RowKind::Link { .. } | RowKind::Header => "  ",
    };
    spans.push(Span::styled(marker, Style::default().fg(Color::DarkGray)));

    if let Some(icon) = row.icon {
        spans.push(Span::raw(format!("{} ", icon.glyph())));
    }

    let style = match &row.kind {
        RowKind::Link { active: true, .. } => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        RowKind::Link { .. } => Style::default().fg(Color::White),
        RowKind::Section { .. } => Style::default().fg(Color::White),
        RowKind::Header => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    };
    spans.push(Span::styled(row.title.clone(), style));

    Line::from(spans)
}

pub fn row_items(rows: &[MenuRow]) -> Vec<ListItem<'static>> {
    rows.iter().map(|row| ListItem::new(row_line(row))).collect()
}
