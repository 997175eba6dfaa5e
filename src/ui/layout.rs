use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

impl UiAreas {
    /// Rows of menu that fit inside the sidebar border
    pub fn sidebar_rows(&self) -> usize {
        self.sidebar.height.saturating_sub(2).max(1) as usize
    }
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(vertical[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        main: vertical[1],
        footer: vertical[2],
        sidebar: main_chunks[0],
        content: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_split_screen() {
        let ui = areas(Rect::new(0, 0, 120, 40));
        assert_eq!(ui.header.height, 4);
        assert_eq!(ui.sidebar.width, 34);
        assert_eq!(ui.content.x, 34);
        assert_eq!(ui.sidebar_rows(), 32);
        assert_eq!(ui.command_line.y, 39);
    }
}
