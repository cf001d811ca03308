//! Fixed dashboard layout, computed once from the terminal size.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ key help (label)                             │
//! ├──────────────┬───────────────────────────────┤
//! │ search       │                               │
//! │ company      │                               │
//! │ table filter │            output             │
//! ├──────────────┤                               │
//! │ record list  │                               │
//! └──────────────┴───────────────────────────────┘
//! ```

use crate::core::DashError;
use crate::tui::component::Rectangle;

const BORDER: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const FIELDS_TOP: u16 = 3;

/// Smallest terminal the layout fits in.
pub const MIN_WIDTH: u16 = 6;
pub const MIN_HEIGHT: u16 = FIELDS_TOP + 3 * INPUT_HEIGHT + BORDER + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rectangle,
    pub search: Rectangle,
    pub company: Rectangle,
    pub table_filter: Rectangle,
    pub records: Rectangle,
    pub output: Rectangle,
}

impl DashboardLayout {
    pub fn compute(width: u16, height: u16) -> Result<Self, DashError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(DashError::Layout(format!(
                "terminal is {width}x{height}, need at least {MIN_WIDTH}x{MIN_HEIGHT}"
            )));
        }

        let left = BORDER;
        let right = width - BORDER;
        let bottom = height - BORDER;
        let column = width / 3;
        let field = |n: u16| {
            let top = FIELDS_TOP + n * INPUT_HEIGHT;
            Rectangle::new(left, top, column, top + INPUT_HEIGHT)
        };

        Ok(Self {
            header: Rectangle::new(left, 0, width - 2 * BORDER, FIELDS_TOP)?,
            search: field(0)?,
            company: field(1)?,
            table_filter: field(2)?,
            records: Rectangle::new(left, FIELDS_TOP + 3 * INPUT_HEIGHT, column, bottom)?,
            output: Rectangle::new(left + column, FIELDS_TOP, right, bottom)?,
        })
    }
}
