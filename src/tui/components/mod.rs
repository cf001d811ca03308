//! # Component Variants
//!
//! The three kinds of box the dashboard draws:
//!
//! - `Label`: read-only text without a border (key help across the top)
//! - `TextField`: editable text with a placeholder (filters, output)
//! - `RowList`: selectable rows (record list)
//!
//! Each file holds the variant's state, its state machine, its rendering
//! and its tests. Selection and placement live one level up in
//! [`Component`](crate::tui::component::Component).

pub mod label;
pub mod row_list;
pub mod text_field;

pub use label::Label;
pub use row_list::RowList;
pub use text_field::TextField;
