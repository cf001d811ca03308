//! # Components
//!
//! Every box on screen is a [`Component`]: a fixed rectangle, a "selected"
//! flag and one of three closed variants ([`Kind`]). The variant set never
//! grows at runtime, so dispatch is a `match`, not a trait object.
//!
//! Drawing is split in two steps:
//!
//! 1. Each variant computes what it shows from its state (`display`), with
//!    no side effects.
//! 2. [`Component::draw`] pushes that to the frame, once per render pass.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::core::DashError;
use crate::core::config::Theme;
use crate::tui::components::{Label, RowList, TextField};
use crate::tui::token::Token;

/// Screen rectangle in terminal cells, `x1 < x2` and `y1 < y2`. Only
/// [`Rectangle::new`] builds one, so `area` never underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
}

impl Rectangle {
    pub fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Result<Self, DashError> {
        if x1 >= x2 || y1 >= y2 {
            return Err(DashError::Layout(format!(
                "invalid rectangle ({x1},{y1})-({x2},{y2})"
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub fn area(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1)
    }
}

/// Index of a component in the [`Screen`](crate::tui::screen::Screen) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) usize);

#[derive(Debug, Clone)]
pub enum Kind {
    Label(Label),
    TextField(TextField),
    RowList(RowList),
}

#[derive(Debug, Clone)]
pub struct Component {
    rect: Rectangle,
    selected: bool,
    pub kind: Kind,
}

impl Component {
    pub fn new(rect: Rectangle, kind: Kind) -> Self {
        Self {
            rect,
            selected: false,
            kind,
        }
    }

    pub fn label(rect: Rectangle, label: Label) -> Self {
        Self::new(rect, Kind::Label(label))
    }

    pub fn text_field(rect: Rectangle, field: TextField) -> Self {
        Self::new(rect, Kind::TextField(field))
    }

    pub fn row_list(rect: Rectangle, list: RowList) -> Self {
        Self::new(rect, Kind::RowList(list))
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Write one token into the component. Only text fields change.
    pub fn write(&mut self, token: Token) {
        match &mut self.kind {
            Kind::TextField(field) => field.write(token),
            Kind::RowList(list) => list.write(token),
            Kind::Label(_) => {}
        }
    }

    /// Deliver a routed token: row lists navigate on arrows and paging,
    /// everything else goes through `write`.
    pub fn input(&mut self, token: Token) {
        if let Kind::RowList(list) = &mut self.kind {
            match token {
                Token::Up | Token::Previous => {
                    list.previous();
                    return;
                }
                Token::Down | Token::Next => {
                    list.next();
                    return;
                }
                _ => {}
            }
        }
        self.write(token);
    }

    pub fn as_text_field(&self) -> Option<&TextField> {
        match &self.kind {
            Kind::TextField(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_text_field_mut(&mut self) -> Option<&mut TextField> {
        match &mut self.kind {
            Kind::TextField(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_row_list(&self) -> Option<&RowList> {
        match &self.kind {
            Kind::RowList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_row_list_mut(&mut self) -> Option<&mut RowList> {
        match &mut self.kind {
            Kind::RowList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match &mut self.kind {
            Kind::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Text currently shown, for text-bearing variants.
    pub fn display(&self) -> Option<&str> {
        match &self.kind {
            Kind::Label(label) => Some(label.display()),
            Kind::TextField(field) => Some(field.display(self.selected)),
            Kind::RowList(_) => None,
        }
    }

    /// Push the component to the frame, clipped to the frame area.
    pub fn draw(&self, frame: &mut Frame, theme: &Theme) {
        let area = self.rect.area().intersection(frame.area());
        if area.is_empty() {
            return;
        }
        let border = if self.selected {
            Style::default().fg(theme.selected)
        } else {
            Style::default().fg(theme.border)
        };
        match &self.kind {
            Kind::Label(label) => label.render(frame, area),
            Kind::TextField(field) => field.render(frame, area, border, self.selected),
            Kind::RowList(list) => list.render(frame, area, border),
        }
    }
}
