//! Row assembly: one logical row as one or more bordered lines.
//!
//! A row is `lead · cell · sep · cell · … · trail`. Passing no texts
//! yields an all-fill row, which with the horizontal stroke as fill glyph
//! is exactly a horizontal rule broken only by its junction glyphs.

use crate::cell::format_cell;
use crate::style::Align;

/// The four glyphs framing a row: left edge, column separator, right
/// edge, and the fill used inside cells.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowGlyphs {
    pub lead: char,
    pub sep: char,
    pub trail: char,
    pub fill: char,
}

/// Assemble one logical row over the given column widths.
///
/// Returns a single string; in wrap mode a row whose text overflows its
/// usable width spans several lines joined by embedded `\n`. At least one
/// line is always produced. Cells missing from `texts` render as fill.
///
/// In wrap mode each cell's text is consumed in chunks of its usable
/// width; line k carries every cell's k-th chunk. A cell with usable
/// width 0 contributes no chunks and its text is dropped.
pub(crate) fn assemble_row(
    texts: Option<&[String]>,
    widths: &[usize],
    padding: usize,
    glyphs: RowGlyphs,
    align: Align,
    auto_wrap: bool,
) -> String {
    let mut out = String::new();
    let mut line = 0;
    loop {
        let mut has_more = false;
        if line > 0 {
            out.push('\n');
        }
        out.push(glyphs.lead);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                out.push(glyphs.sep);
            }
            let text = texts.and_then(|t| t.get(i)).map(String::as_str);
            if auto_wrap {
                let usable = width.saturating_sub(padding * 2);
                let start = usable * line;
                match text {
                    Some(t) if usable > 0 && t.chars().count() > start => {
                        let len = t.chars().count();
                        let chunk: String = t.chars().skip(start).take(usable).collect();
                        out.push_str(&format_cell(
                            Some(&chunk),
                            width,
                            padding,
                            glyphs.fill,
                            align,
                        ));
                        if start + usable < len {
                            has_more = true;
                        }
                    }
                    _ => out.push_str(&format_cell(None, width, padding, glyphs.fill, align)),
                }
            } else {
                out.push_str(&format_cell(text, width, padding, glyphs.fill, align));
            }
        }
        out.push(glyphs.trail);
        line += 1;
        if !has_more {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: RowGlyphs = RowGlyphs {
        lead: '├',
        sep: '┼',
        trail: '┤',
        fill: '─',
    };

    const DATA: RowGlyphs = RowGlyphs {
        lead: '│',
        sep: '│',
        trail: '│',
        fill: ' ',
    };

    fn cells(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_separator_row_is_continuous() {
        let row = assemble_row(None, &[3, 5], 1, RULE, Align::Left, false);
        assert_eq!(row, "├───┼─────┤");
    }

    #[test]
    fn test_single_line_row() {
        let texts = cells(&["a", "bb"]);
        let row = assemble_row(Some(&texts), &[3, 4], 1, DATA, Align::Left, false);
        assert_eq!(row, "│ a │ bb │");
    }

    #[test]
    fn test_missing_trailing_cells_render_as_fill() {
        let texts = cells(&["a"]);
        let row = assemble_row(Some(&texts), &[3, 3], 1, DATA, Align::Left, false);
        assert_eq!(row, "│ a │   │");
    }

    #[test]
    fn test_truncation_without_wrap() {
        let texts = cells(&["abcdef"]);
        let row = assemble_row(Some(&texts), &[5], 1, DATA, Align::Left, false);
        assert_eq!(row, "│ abc │");
    }

    #[test]
    fn test_wrap_splits_into_chunk_lines() {
        let texts = cells(&["abcdef"]);
        let row = assemble_row(Some(&texts), &[5], 1, DATA, Align::Left, true);
        assert_eq!(row, "│ abc │\n│ def │");
    }

    #[test]
    fn test_wrap_trailing_partial_chunk() {
        let texts = cells(&["abcd"]);
        let row = assemble_row(Some(&texts), &[5], 1, DATA, Align::Left, true);
        assert_eq!(row, "│ abc │\n│ d   │");
    }

    #[test]
    fn test_wrap_uneven_columns_pad_exhausted_cells() {
        let texts = cells(&["abcdef", "x"]);
        let row = assemble_row(Some(&texts), &[5, 3], 1, DATA, Align::Left, true);
        assert_eq!(row, "│ abc │ x │\n│ def │   │");
    }

    #[test]
    fn test_wrap_reassembles_original_text() {
        let text = "0123456789abcdef";
        let texts = cells(&[text]);
        let row = assemble_row(Some(&texts), &[7], 1, DATA, Align::Left, true);
        let joined: String = row
            .split('\n')
            .map(|line| line.trim_matches(&['│', ' '][..]))
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_wrap_zero_usable_width_drops_text() {
        // padding swallows the column; exactly one all-fill line
        let texts = cells(&["abc"]);
        let row = assemble_row(Some(&texts), &[2], 1, DATA, Align::Left, true);
        assert_eq!(row, "│  │");
    }

    #[test]
    fn test_zero_width_column_keeps_separators() {
        let texts = cells(&["a", "b"]);
        let row = assemble_row(Some(&texts), &[0, 3], 0, DATA, Align::Left, false);
        assert_eq!(row, "││b  │");
    }
}
