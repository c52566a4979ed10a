//! Error types for tablestrlib

use thiserror::Error;

/// Errors that can occur while configuring a table.
///
/// Rendering itself is total and never fails; these cover the parsing
/// surfaces used by callers that build styles from text (CLI flags,
/// config files).
#[derive(Error, Debug)]
pub enum TableError {
    /// Unrecognized alignment name
    #[error("unknown alignment '{0}' (expected left, center, or right)")]
    UnknownAlignment(String),

    /// Border glyph string with the wrong number of glyphs
    #[error("border set needs exactly 12 glyphs, got {0}")]
    BorderGlyphCount(usize),
}
