//! # RowList Component
//!
//! Ordered row labels with a circular selection cursor. Rows only change
//! through `add_row` and `flush`; key presses move the cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::tui::token::Token;

#[derive(Debug, Clone)]
pub struct RowList {
    title: String,
    rows: Vec<String>,
    selected_row: usize,
}

impl RowList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            selected_row: 0,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// The selected label, if there are rows.
    pub fn selected_label(&self) -> Option<&str> {
        self.rows.get(self.selected_row).map(String::as_str)
    }

    /// Append a row. The selection does not move.
    pub fn add_row(&mut self, label: impl Into<String>) {
        self.rows.push(label.into());
    }

    /// Select the next row, wrapping to the first. `None` when empty.
    pub fn next(&mut self) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        self.selected_row = if self.selected_row + 1 >= self.rows.len() {
            0
        } else {
            self.selected_row + 1
        };
        Some(self.selected_row)
    }

    /// Select the previous row, wrapping to the last. `None` when empty.
    pub fn previous(&mut self) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        self.selected_row = match self.selected_row {
            0 => self.rows.len() - 1,
            i => (i - 1).min(self.rows.len() - 1),
        };
        Some(self.selected_row)
    }

    /// Rows only change via `add_row`/`flush`.
    pub fn write(&mut self, _token: Token) {}

    /// Drop all rows and reset the selection to the first slot.
    pub fn flush(&mut self) {
        self.rows.clear();
        self.selected_row = 0;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, border: Style) {
        let items: Vec<ListItem> = self.rows.iter().map(|r| ListItem::new(r.as_str())).collect();
        let list = List::new(items)
            .block(Block::bordered().title(self.title.as_str()).border_style(border))
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black));

        let mut state = ListState::default();
        if !self.rows.is_empty() {
            state.select(Some(self.selected_row));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn list_of(rows: &[&str]) -> RowList {
        let mut list = RowList::new("Select Table");
        for row in rows {
            list.add_row(*row);
        }
        list
    }

    #[test]
    fn test_empty_list_navigation_is_sentinel() {
        let mut list = RowList::new("Select Table");
        assert_eq!(list.next(), None);
        assert_eq!(list.previous(), None);
        assert_eq!(list.selected_row(), 0);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut list = list_of(&["a", "b", "c"]);
        assert_eq!(list.next(), Some(1));
        assert_eq!(list.next(), Some(2));
        assert_eq!(list.next(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut list = list_of(&["a", "b", "c"]);
        assert_eq!(list.previous(), Some(2));
        assert_eq!(list.previous(), Some(1));
        assert_eq!(list.selected_label(), Some("b"));
    }

    #[test]
    fn test_add_row_keeps_selection_and_duplicates() {
        let mut list = list_of(&["a", "b"]);
        list.next();
        list.add_row("a");
        assert_eq!(list.selected_row(), 1);
        assert_eq!(list.rows(), ["a", "b", "a"]);
    }

    #[test]
    fn test_flush_resets_selection() {
        let mut list = list_of(&["a", "b", "c"]);
        list.previous();
        list.flush();
        assert!(list.rows().is_empty());
        assert_eq!(list.selected_row(), 0);
        assert_eq!(list.selected_label(), None);
        assert_eq!(list.next(), None);

        list.add_row("z");
        assert_eq!(list.selected_label(), Some("z"));
    }

    #[test]
    fn test_write_is_noop() {
        let mut list = list_of(&["a"]);
        list.write(Token::Char('x'));
        list.write(Token::Backspace);
        assert_eq!(list.rows(), ["a"]);
    }

    #[test]
    fn test_render_lists_rows() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let list = list_of(&["alpha", "beta"]);

        terminal
            .draw(|frame| list.render(frame, frame.area(), Style::default()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Select Table"));
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
    }
}
