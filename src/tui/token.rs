use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A normalized key press. The alphabet is closed: every key the
/// dashboard reacts to maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A printable character other than space.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Insert,
    Delete,
    Home,
    End,
    /// Page Up.
    Previous,
    /// Page Down.
    Next,
    Backspace,
    Tab,
    Enter,
    Escape,
    Space,
    /// Ctrl+C
    Quit,
    /// Ctrl+F
    FlushLog,
    /// Ctrl+L
    ToggleLogView,
}

impl Token {
    /// Tokens a text field never inserts; routing layers consume them.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Token::Tab
                | Token::Enter
                | Token::Home
                | Token::End
                | Token::Escape
                | Token::Up
                | Token::Down
                | Token::Left
                | Token::Right
                | Token::Previous
                | Token::Next
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Token::Char(c) => return write!(f, "{c}"),
            Token::Up => "<Up>",
            Token::Down => "<Down>",
            Token::Left => "<Left>",
            Token::Right => "<Right>",
            Token::Insert => "<Insert>",
            Token::Delete => "<Delete>",
            Token::Home => "<Home>",
            Token::End => "<End>",
            Token::Previous => "<Previous>",
            Token::Next => "<Next>",
            Token::Backspace => "<Backspace>",
            Token::Tab => "<Tab>",
            Token::Enter => "<Enter>",
            Token::Escape => "<Escape>",
            Token::Space => "<Space>",
            Token::Quit => "<C-c>",
            Token::FlushLog => "<C-f>",
            Token::ToggleLogView => "<C-l>",
        };
        f.write_str(label)
    }
}

/// Map a raw key event to its token. Keys outside the alphabet and key
/// releases map to `None`; a held key repeats its token.
pub fn normalize(key: KeyEvent) -> Option<Token> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Token::Quit),
            KeyCode::Char('f') => Some(Token::FlushLog),
            KeyCode::Char('l') => Some(Token::ToggleLogView),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(' ') => Some(Token::Space),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
            log::debug!("Ignoring Alt+{c}");
            None
        }
        KeyCode::Char(c) => Some(Token::Char(c)),
        KeyCode::Up => Some(Token::Up),
        KeyCode::Down => Some(Token::Down),
        KeyCode::Left => Some(Token::Left),
        KeyCode::Right => Some(Token::Right),
        KeyCode::Insert => Some(Token::Insert),
        KeyCode::Delete => Some(Token::Delete),
        KeyCode::Home => Some(Token::Home),
        KeyCode::End => Some(Token::End),
        KeyCode::PageUp => Some(Token::Previous),
        KeyCode::PageDown => Some(Token::Next),
        KeyCode::Backspace => Some(Token::Backspace),
        KeyCode::Tab => Some(Token::Tab),
        KeyCode::Enter => Some(Token::Enter),
        KeyCode::Esc => Some(Token::Escape),
        _ => None,
    }
}
