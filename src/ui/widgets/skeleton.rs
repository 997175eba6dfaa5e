//! Placeholder rows drawn while the menu state is still loading

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const WIDTHS: [u16; 5] = [70, 55, 85, 60, 75];

/// Grey bars of uneven width, one per row, with an icon-sized block in front
pub struct MenuSkeleton {
    rows: u16,
    style: Style,
}

impl MenuSkeleton {
    pub fn new(rows: u16) -> Self {
        Self {
            rows,
            style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Bar width for `row` as a share of the available columns
    fn bar_width(row: u16, available: u16) -> u16 {
        let percent = WIDTHS[row as usize % WIDTHS.len()];
        (available as u32 * percent as u32 / 100) as u16
    }
}

impl Widget for MenuSkeleton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        let rows = self.rows.min(area.height);
        for row in 0..rows {
            let y = area.y + row;
            buf.set_string(area.x, y, "▒▒", self.style);
            let width = Self::bar_width(row, area.width - 3);
            let bar = "░".repeat(width as usize);
            buf.set_string(area.x + 3, y, bar, self.style);
        }
    }
}
