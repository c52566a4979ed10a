//! Table input model and its builder surface.
//!
//! A [`TableModel`] holds the three optional sections — caption, header,
//! body — as plain strings. It carries no layout information: widths and
//! borders are computed at render time from the model plus a
//! [`TableStyle`](crate::TableStyle).
//!
//! An empty or missing cell renders the same as an absent one (all fill
//! glyphs, zero width contribution), so cells are stored as `String` and
//! rows may be shorter than the final column count.

use serde::{Deserialize, Serialize};

/// The renderable table: optional caption, optional header, body rows.
///
/// Built incrementally via the chainable setters, then handed to
/// [`build_lines`](crate::build_lines). Presence of a section is decided
/// by content, not by construction history: an empty caption string or an
/// empty header vector counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableModel {
    /// Banner text above the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Column titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Vec<String>>,
    /// Data rows; each row is one cell text per column
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Vec<String>>,
}

impl TableModel {
    /// Empty model (renders to an empty line sequence)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caption banner
    pub fn set_caption(&mut self, caption: impl Into<String>) -> &mut Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the header row
    pub fn set_head(&mut self, head: Vec<String>) -> &mut Self {
        self.head = Some(head);
        self
    }

    /// Append one body row
    pub fn add_row(&mut self, row: Vec<String>) -> &mut Self {
        self.body.push(row);
        self
    }

    /// Drop all body rows, keeping caption and header
    pub fn clear_body(&mut self) -> &mut Self {
        self.body.clear();
        self
    }

    /// Drop all three sections
    pub fn clear(&mut self) -> &mut Self {
        self.caption = None;
        self.head = None;
        self.body.clear();
        self
    }

    /// True when no section would render
    pub fn is_empty(&self) -> bool {
        !self.has_caption() && !self.has_head() && !self.has_body()
    }

    /// Caption present and non-empty
    pub fn has_caption(&self) -> bool {
        self.caption.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Header present with at least one cell
    pub fn has_head(&self) -> bool {
        self.head.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// At least one body row
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}
