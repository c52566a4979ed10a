//! # tablestrlib
//!
//! Render an in-memory table — optional caption, optional header, body
//! rows — into pre-formatted text lines drawn with box glyphs, ready for
//! a console or a log file.
//!
//! ## Overview
//!
//! The engine takes a [`TableModel`] and a [`TableStyle`] and returns the
//! finished lines. Column widths are computed from the content (the
//! header, when present, sizes its columns; body rows size the rest),
//! each cell is aligned and padded within its column, and the horizontal
//! rules between sections pick their junction glyphs from which sections
//! they sit between — a caption's top rule is unbroken, a header's top
//! rule opens the column grid, and so on.
//!
//! - **Per-section alignment**: caption, header, and body align
//!   independently (left, center, right)
//! - **Wrapping or truncation**: over-long cells wrap onto extra lines,
//!   or truncate when auto-wrap is off
//! - **Width cap**: an optional max column width bounds wide content
//! - **Pure data in, strings out**: no I/O, no terminal handling, no
//!   global state; rendering is deterministic and total
//!
//! Width is measured in code points; double-width glyphs and combining
//! marks are not accounted for.
//!
//! ## Example
//!
//! ```rust
//! use tablestrlib::{build_string, TableModel, TableStyle};
//!
//! let mut model = TableModel::new();
//! model
//!     .set_head(vec!["A".into(), "B".into()])
//!     .add_row(vec!["1".into(), "2".into()]);
//!
//! let table = build_string(&model, &TableStyle::default());
//! assert_eq!(
//!     table,
//!     "┌───┬───┐\n\
//!      │ A │ B │\n\
//!      ├───┼───┤\n\
//!      │ 1 │ 2 │\n\
//!      └───┴───┘"
//! );
//! ```

mod cell;
pub mod compose;
pub mod error;
mod layout;
pub mod model;
mod row;
pub mod style;

pub use compose::{build_lines, build_string};
pub use error::TableError;
pub use model::TableModel;
pub use style::{Align, Alignments, Border, TableStyle};

/// Result type for tablestrlib operations
pub type Result<T> = std::result::Result<T, TableError>;
