//! Style configuration for table rendering.
//!
//! This module contains all configuration types that control how a table
//! is drawn: the border glyph set, per-section alignment, cell padding,
//! the optional column width cap, and the wrap/divider flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;

/// Horizontal alignment of cell text within its usable width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Text flush left, placeholders appended on the right
    Left,
    /// Text centered; on an odd gap the extra placeholder goes right
    Center,
    /// Text flush right, placeholders prepended on the left
    Right,
}

impl FromStr for Align {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Align::Left),
            "center" | "centre" | "c" => Ok(Align::Center),
            "right" | "r" => Ok(Align::Right),
            _ => Err(TableError::UnknownAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        };
        f.write_str(name)
    }
}

/// Per-section alignment: caption, header, and body are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignments {
    /// Caption banner alignment
    pub caption: Align,
    /// Header row alignment
    pub head: Align,
    /// Body row alignment
    pub body: Align,
}

impl Default for Alignments {
    fn default() -> Self {
        Self {
            caption: Align::Center,
            head: Align::Left,
            body: Align::Right,
        }
    }
}

impl Alignments {
    /// Same alignment for all three sections
    pub fn uniform(align: Align) -> Self {
        Self {
            caption: align,
            head: align,
            body: align,
        }
    }

    /// Builder: set caption alignment
    pub fn with_caption(mut self, align: Align) -> Self {
        self.caption = align;
        self
    }

    /// Builder: set header alignment
    pub fn with_head(mut self, align: Align) -> Self {
        self.head = align;
        self
    }

    /// Builder: set body alignment
    pub fn with_body(mut self, align: Align) -> Self {
        self.body = align;
        self
    }
}

/// The 12-glyph border set.
///
/// Four corners, four T-junctions, the cross, the two strokes, and the
/// `placeholder` fill glyph used inside cells (conventionally a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top_center: char,
    pub bottom_center: char,
    pub left_center: char,
    pub right_center: char,
    pub center: char,
    pub horizontal: char,
    pub vertical: char,
    pub placeholder: char,
}

impl Default for Border {
    /// Unicode light box drawing set
    fn default() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            top_center: '┬',
            bottom_center: '┴',
            left_center: '├',
            right_center: '┤',
            center: '┼',
            horizontal: '─',
            vertical: '│',
            placeholder: ' ',
        }
    }
}

impl Border {
    /// Plain `+ - |` set for terminals without box-drawing glyphs
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            top_center: '+',
            bottom_center: '+',
            left_center: '+',
            right_center: '+',
            center: '+',
            horizontal: '-',
            vertical: '|',
            placeholder: ' ',
        }
    }

    /// Build a border set from a 12-glyph string, in field order:
    /// corners (TL TR BL BR), T-junctions (TC BC LC RC), cross, horizontal,
    /// vertical, placeholder.
    ///
    /// The default set spelled out this way is `"┌┐└┘┬┴├┤┼─│ "`.
    pub fn from_glyphs(glyphs: &str) -> Result<Self, TableError> {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.len() != 12 {
            return Err(TableError::BorderGlyphCount(chars.len()));
        }
        Ok(Self {
            top_left: chars[0],
            top_right: chars[1],
            bottom_left: chars[2],
            bottom_right: chars[3],
            top_center: chars[4],
            bottom_center: chars[5],
            left_center: chars[6],
            right_center: chars[7],
            center: chars[8],
            horizontal: chars[9],
            vertical: chars[10],
            placeholder: chars[11],
        })
    }
}

/// Full rendering configuration.
///
/// All fields are public; the `with_*` builders exist for fluent
/// construction from the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Border glyph set
    pub border: Border,
    /// Per-section alignment
    pub align: Alignments,
    /// Placeholder glyphs reserved on both sides of every cell
    pub cell_padding: usize,
    /// Cap on each column's computed width; `None` is unbounded
    pub cell_max_width: Option<usize>,
    /// Wrap over-long cell text onto extra lines instead of truncating
    pub cell_auto_wrap: bool,
    /// Emit a horizontal separator between consecutive body rows
    pub body_divide: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            border: Border::default(),
            align: Alignments::default(),
            cell_padding: 1,
            cell_max_width: None,
            cell_auto_wrap: true,
            body_divide: true,
        }
    }
}

impl TableStyle {
    /// Style with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the border glyph set
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Builder: set per-section alignment
    pub fn with_align(mut self, align: Alignments) -> Self {
        self.align = align;
        self
    }

    /// Builder: set cell padding
    pub fn with_cell_padding(mut self, padding: usize) -> Self {
        self.cell_padding = padding;
        self
    }

    /// Builder: cap column widths (`None` removes the cap)
    pub fn with_cell_max_width(mut self, max_width: Option<usize>) -> Self {
        self.cell_max_width = max_width;
        self
    }

    /// Builder: set auto-wrap
    pub fn with_cell_auto_wrap(mut self, wrap: bool) -> Self {
        self.cell_auto_wrap = wrap;
        self
    }

    /// Builder: set the body-row divider
    pub fn with_body_divide(mut self, divide: bool) -> Self {
        self.body_divide = divide;
        self
    }
}
