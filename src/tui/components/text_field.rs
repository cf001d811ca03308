//! # TextField Component
//!
//! Editable text with a placeholder. Used for the filter boxes on the left
//! and for the output panel on the right.
//!
//! ## Editing State Machine
//!
//! ```text
//!            first non-navigation token (clears, then applies)
//!   ┌───────┐ ─────────────────────────────────────────▶ ┌─────────┐
//!   │ Blank │                                            │ Editing │
//!   └───────┘ ◀───────────────────────────────────────── └─────────┘
//!               Backspace at length ≤ 1, or flush()
//! ```
//!
//! `Blank` means the text equals the placeholder: the field holds no real
//! user input and [`TextField::contents`] returns `""`.
//!
//! Navigation tokens (Tab, Enter, arrows, Home/End, Escape, paging) never
//! edit the field; the dispatch loop and list layer consume them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Blank,
    Editing,
}

#[derive(Debug, Clone)]
pub struct TextField {
    title: String,
    text: String,
    placeholder: String,
    /// Show nothing instead of the placeholder while unselected. True by default.
    pub hide_unselected_placeholder: bool,
    /// Accept user writes. True by default.
    pub writable: bool,
}

impl TextField {
    /// A blank field showing `placeholder`.
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            title: title.into(),
            text: placeholder.clone(),
            placeholder,
            hide_unselected_placeholder: true,
            writable: true,
        }
    }

    /// A field seeded with `text`, which may differ from the placeholder.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn state(&self) -> FieldState {
        if self.text == self.placeholder {
            FieldState::Blank
        } else {
            FieldState::Editing
        }
    }

    /// Raw text, placeholder included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Apply one user token.
    pub fn write(&mut self, token: Token) {
        if !self.writable || token.is_navigation() {
            return;
        }

        if self.state() == FieldState::Blank {
            self.text.clear();
        }

        match token {
            Token::Space => self.text.push(' '),
            Token::Backspace => {
                if self.text.chars().count() <= 1 {
                    self.flush();
                } else {
                    self.text.pop();
                }
            }
            Token::Char(c) => self.text.push(c),
            other => self.text.push_str(&other.to_string()),
        }
    }

    /// Replace the text wholesale, bypassing the editing rules.
    pub fn overwrite(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Back to `Blank`.
    pub fn flush(&mut self) {
        self.text.clone_from(&self.placeholder);
    }

    /// Real user input: empty while `Blank`.
    pub fn contents(&self) -> &str {
        match self.state() {
            FieldState::Blank => "",
            FieldState::Editing => &self.text,
        }
    }

    /// What the field shows given its selection. Empty text renders as the
    /// placeholder; the placeholder is hidden while unselected if asked to.
    pub fn display(&self, selected: bool) -> &str {
        let blank = self.text.is_empty() || self.state() == FieldState::Blank;
        if !blank {
            &self.text
        } else if self.hide_unselected_placeholder && !selected {
            ""
        } else {
            &self.placeholder
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, border: Style, selected: bool) {
        let mut block = Block::bordered().border_style(border);
        if !self.title.is_empty() {
            block = block.title(self.title.as_str());
        }
        let paragraph = Paragraph::new(self.display(selected))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn field(text: &str, placeholder: &str) -> TextField {
        TextField::new("title", placeholder).with_text(text)
    }

    #[test]
    fn test_writing_to_text_field() {
        let cases = [
            ("blank box with default text", "start here", "start here", Token::Char('a'), "a"),
            ("empty box", "", "", Token::Char('a'), "a"),
            ("backspace with existing text", "foo", "", Token::Backspace, "fo"),
            ("backspace with no text", "", "", Token::Backspace, ""),
            ("backspace with no text resets to blank", "", "blank", Token::Backspace, "blank"),
            ("backspace with one char resets to blank", "a", "blank", Token::Backspace, "blank"),
            ("first character blanks the box", ":start here", ":start here", Token::Char('a'), "a"),
            ("add a space", "hello", ":start here", Token::Space, "hello "),
        ];

        for (name, text, placeholder, token, expected) in cases {
            let mut f = field(text, placeholder);
            f.write(token);
            assert_eq!(f.text(), expected, "case: {name}");
        }
    }

    #[test]
    fn test_backspace_at_length_one_or_less_is_blank() {
        for text in ["", "x", "é"] {
            let mut f = field(text, "blank");
            f.write(Token::Backspace);
            assert_eq!(f.state(), FieldState::Blank, "text: {text:?}");
            assert_eq!(f.text(), "blank");
        }
    }

    #[test]
    fn test_backspace_drops_one_char_not_one_byte() {
        let mut f = field("aé", "");
        f.write(Token::Backspace);
        assert_eq!(f.text(), "a");
    }

    #[test]
    fn test_navigation_tokens_do_not_clear_placeholder() {
        let mut f = TextField::new("Search", ":type to search");
        for token in [Token::Tab, Token::Enter, Token::Up, Token::Home, Token::Escape, Token::Next] {
            f.write(token);
            assert_eq!(f.state(), FieldState::Blank);
        }
        f.write(Token::Char('q'));
        assert_eq!(f.text(), "q");
    }

    #[test]
    fn test_other_named_tokens_append_their_label() {
        let mut f = field("x", "");
        f.write(Token::Insert);
        assert_eq!(f.text(), "x<Insert>");
    }

    #[test]
    fn test_read_only_field_ignores_writes() {
        let mut f = TextField::new("Output", "try searching...");
        f.writable = false;
        f.write(Token::Char('a'));
        assert_eq!(f.state(), FieldState::Blank);
    }

    #[test]
    fn test_contents_empty_iff_blank() {
        let mut f = TextField::new("Search", ":type");
        assert_eq!(f.contents(), "");
        assert_eq!(f.state(), FieldState::Blank);

        f.write(Token::Char('a'));
        assert_eq!(f.contents(), "a");
        assert_eq!(f.state(), FieldState::Editing);

        f.flush();
        assert_eq!(f.contents(), "");
        assert_eq!(f.state(), FieldState::Blank);
    }

    #[test]
    fn test_overwrite_bypasses_editing() {
        let mut f = TextField::new("", "try searching...");
        f.overwrite("{\n  \"id\": \"a\"\n}");
        assert_eq!(f.state(), FieldState::Editing);
        assert_eq!(f.contents(), "{\n  \"id\": \"a\"\n}");
    }

    #[test]
    fn test_placeholder_hidden_while_unselected() {
        let f = TextField::new("Search", ":type to search");
        assert_eq!(f.display(false), "");
        assert_eq!(f.display(true), ":type to search");

        let mut shown = TextField::new("", "try searching...");
        shown.hide_unselected_placeholder = false;
        assert_eq!(shown.display(false), "try searching...");
    }

    #[test]
    fn test_display_is_pure() {
        let f = field("", "blank");
        assert_eq!(f.display(true), "blank");
        assert_eq!(f.text(), "");
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let f = field("hello", "");

        terminal
            .draw(|frame| f.render(frame, frame.area(), Style::default(), true))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("title"));
        assert!(text.contains("hello"));
    }
}
