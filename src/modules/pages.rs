//! Analytics pages - executive summary on the root, placeholders elsewhere

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module, NavigateTarget};

#[derive(Debug, Clone, Copy)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Alert {
    pub headline: &'static str,
    pub detail: &'static str,
    /// Page that explains the anomaly
    pub path: &'static str,
}

pub const SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard {
        title: "Total Revenue",
        value: "₹45,23,100",
        change: "+20.1% from last month",
    },
    SummaryCard {
        title: "Prime Cost %",
        value: "57.2%",
        change: "-2.3% from last month",
    },
    SummaryCard {
        title: "Customer Covers",
        value: "12,450",
        change: "+15.3% from last month",
    },
    SummaryCard {
        title: "Avg Check Size",
        value: "₹456",
        change: "+4.2% from last month",
    },
];

pub const ALERTS: [Alert; 3] = [
    Alert {
        headline: "High food cost variance at Cyber City location",
        detail: "Food cost % increased to 34.2% (target: 30%)",
        path: "/food-cost/variance",
    },
    Alert {
        headline: "Employee turnover spike at MG Road",
        detail: "3 departures this week (monthly target: 2)",
        path: "/labor/stability",
    },
    Alert {
        headline: "Low table turnover during dinner",
        detail: "1.8x turnover vs target 2.2x at Sohna Road",
        path: "/operational/service",
    },
];

#[derive(Debug, Clone, Default)]
pub struct PageView {
    selected_alert: usize,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_alert(&self) -> usize {
        self.selected_alert
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (card, chunk) in SUMMARY_CARDS.iter().zip(chunks.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    card.value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(card.change, Style::default().fg(Color::DarkGray))),
            ];
            let paragraph = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(card.title))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *chunk);
        }
    }

    fn render_alerts(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Performance indicators requiring attention",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];
        for (idx, alert) in ALERTS.iter().enumerate() {
            let marker = if idx == self.selected_alert { "-> " } else { "   " };
            let style = if idx == self.selected_alert {
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(alert.headline, style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", alert.detail),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Real-time Alerts & Anomalies"),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let scope = if ctx.location_count == 1 {
            "1 location".to_string()
        } else {
            format!("{} locations", ctx.location_count)
        };
        let lines = vec![
            Line::from(Span::styled(
                format!("Comparative performance across all {scope}"),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from("Performance charts and comparative analytics will be displayed here"),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Multi-Unit Performance Overview"),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);
        let message = Paragraph::new(format!(
            "{} analytics will be implemented here",
            ctx.page_title
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(message, vertical[1]);
    }
}

impl Module for PageView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        if !ctx.is_home() {
            return Action::None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_alert = self.selected_alert.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_alert = (self.selected_alert + 1).min(ALERTS.len() - 1);
                Action::None
            }
            KeyCode::Enter => ALERTS
                .get(self.selected_alert)
                .map(|alert| Action::Navigate(NavigateTarget::Path(alert.path.to_string())))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(ctx.page_title.clone());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !ctx.is_home() {
            self.render_placeholder(frame, inner, ctx);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(10),
                Constraint::Min(5),
            ])
            .split(inner);

        self.render_summary(frame, chunks[0]);
        self.render_alerts(frame, chunks[1]);
        self.render_overview(frame, chunks[2], ctx);
    }
}
