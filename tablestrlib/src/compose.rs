//! Section composition: walk caption → header → body, emitting rows and
//! the horizontal rules between them.
//!
//! Which glyphs a rule uses depends only on the sections on either side
//! of it — the caption's top rule is unbroken while a header's top rule
//! carries column junctions, a rule below the last body row closes every
//! column, and so on. That selection lives in one transition table
//! ([`rule_glyphs`]) instead of per-section conditionals.

use crate::cell::format_cell;
use crate::layout::{plan, Layout};
use crate::model::TableModel;
use crate::row::{assemble_row, RowGlyphs};
use crate::style::{Align, Border, TableStyle};

/// A table section, as seen by the rule transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Caption,
    Head,
    Body,
}

/// Edge and junction glyphs for the rule between two adjacent sections.
/// `None` stands for the table boundary: `from = None` is the top rule,
/// `to = None` the bottom rule.
fn rule_glyphs(border: &Border, from: Option<Section>, to: Option<Section>) -> (char, char, char) {
    match (from, to) {
        // the caption spans all columns, so its top rule is unbroken
        (None, Some(Section::Caption)) => (border.top_left, border.horizontal, border.top_right),
        (None, _) => (border.top_left, border.top_center, border.top_right),
        // a table ending at a caption or header closes with an unbroken rule
        (Some(Section::Caption), None) | (Some(Section::Head), None) => {
            (border.bottom_left, border.horizontal, border.bottom_right)
        }
        // below a caption the column grid opens: top-T junctions
        (Some(Section::Caption), _) => {
            (border.left_center, border.top_center, border.right_center)
        }
        (Some(Section::Head), _) | (Some(Section::Body), Some(Section::Body)) => {
            (border.left_center, border.center, border.right_center)
        }
        (Some(Section::Body), _) => {
            (border.bottom_left, border.bottom_center, border.bottom_right)
        }
    }
}

/// One horizontal rule over the planned columns.
fn rule_line(
    style: &TableStyle,
    layout: &Layout,
    from: Option<Section>,
    to: Option<Section>,
) -> String {
    let (lead, sep, trail) = rule_glyphs(&style.border, from, to);
    assemble_row(
        None,
        &layout.widths,
        style.cell_padding,
        RowGlyphs {
            lead,
            sep,
            trail,
            fill: style.border.horizontal,
        },
        Align::Left,
        false,
    )
}

/// One data or header row over the planned columns.
fn data_line(texts: &[String], style: &TableStyle, layout: &Layout, align: Align) -> String {
    let border = &style.border;
    assemble_row(
        Some(texts),
        &layout.widths,
        style.cell_padding,
        RowGlyphs {
            lead: border.vertical,
            sep: border.vertical,
            trail: border.vertical,
            fill: border.placeholder,
        },
        align,
        style.cell_auto_wrap,
    )
}

/// Caption content lines: the caption is a single cell spanning the full
/// inner table width, sliced into usable-width chunks.
fn caption_lines(lines: &mut Vec<String>, caption: &str, style: &TableStyle, layout: &Layout) {
    let border = &style.border;
    let inner = layout.table_width() - 2;
    // a sole-caption column was sized to the bare text, so padding is
    // dropped here or the banner would never fit
    let padding = if layout.sole_caption {
        0
    } else {
        style.cell_padding
    };
    let usable = inner.saturating_sub(padding * 2);

    if usable == 0 {
        // padding swallows the whole width; one fill-only line, text lost
        let cell = format_cell(None, inner, padding, border.placeholder, style.align.caption);
        lines.push(format!("{}{}{}", border.vertical, cell, border.vertical));
        return;
    }

    let chars: Vec<char> = caption.chars().collect();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + usable).min(chars.len());
        let chunk: String = chars[start..end].iter().collect();
        let cell = format_cell(
            Some(&chunk),
            inner,
            padding,
            border.placeholder,
            style.align.caption,
        );
        lines.push(format!("{}{}{}", border.vertical, cell, border.vertical));
        start = end;
    }
}

/// Render the model to its line sequence.
///
/// One string per output line; in wrap mode a multi-line data row comes
/// back as a single string with embedded newlines, interspersed with the
/// surrounding rules. An empty model yields an empty sequence.
pub fn build_lines(model: &TableModel, style: &TableStyle) -> Vec<String> {
    if model.is_empty() {
        return Vec::new();
    }
    let layout = plan(model, style);
    let mut lines = Vec::new();
    let mut last = None;

    if let Some(caption) = model.caption.as_deref().filter(|c| !c.is_empty()) {
        lines.push(rule_line(style, &layout, last, Some(Section::Caption)));
        caption_lines(&mut lines, caption, style, &layout);
        last = Some(Section::Caption);
    }

    if let Some(head) = model.head.as_deref().filter(|h| !h.is_empty()) {
        lines.push(rule_line(style, &layout, last, Some(Section::Head)));
        lines.push(data_line(head, style, &layout, style.align.head));
        last = Some(Section::Head);
    }

    if model.has_body() {
        lines.push(rule_line(style, &layout, last, Some(Section::Body)));
        for (i, row) in model.body.iter().enumerate() {
            lines.push(data_line(row, style, &layout, style.align.body));
            if style.body_divide && i + 1 < model.body.len() {
                lines.push(rule_line(
                    style,
                    &layout,
                    Some(Section::Body),
                    Some(Section::Body),
                ));
            }
        }
        last = Some(Section::Body);
    }

    lines.push(rule_line(style, &layout, last, None));
    lines
}

/// [`build_lines`], joined with `\n` into one printable string.
pub fn build_string(model: &TableModel, style: &TableStyle) -> String {
    build_lines(model, style).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Alignments, Border};

    fn cells(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    /// Every physical line of a rendered table, wrap lines split out.
    fn physical_lines(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split('\n'))
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_empty_model_renders_nothing() {
        assert!(build_lines(&TableModel::new(), &TableStyle::default()).is_empty());
        assert_eq!(build_string(&TableModel::new(), &TableStyle::default()), "");
    }

    #[test]
    fn test_head_and_body_centered() {
        let mut model = TableModel::new();
        model
            .set_head(cells(&["A", "B"]))
            .add_row(cells(&["1", "2"]));
        let style = TableStyle::default().with_align(Alignments::uniform(Align::Center));
        let lines = build_lines(&model, &style);
        assert_eq!(
            lines,
            vec!["┌───┬───┐", "│ A │ B │", "├───┼───┤", "│ 1 │ 2 │", "└───┴───┘"]
        );
    }

    #[test]
    fn test_sole_caption_is_a_tight_box() {
        let mut model = TableModel::new();
        model.set_caption("Hi");
        let lines = build_lines(&model, &TableStyle::default());
        assert_eq!(lines, vec!["┌──┐", "│Hi│", "└──┘"]);
    }

    #[test]
    fn test_body_only_with_divider() {
        let mut model = TableModel::new();
        model.add_row(cells(&["a"])).add_row(cells(&["b"]));
        let style =
            TableStyle::default().with_align(Alignments::default().with_body(Align::Left));
        let lines = build_lines(&model, &style);
        assert_eq!(lines, vec!["┌───┐", "│ a │", "├───┤", "│ b │", "└───┘"]);
    }

    #[test]
    fn test_body_only_without_divider() {
        let mut model = TableModel::new();
        model.add_row(cells(&["a"])).add_row(cells(&["b"]));
        let style = TableStyle::default()
            .with_align(Alignments::default().with_body(Align::Left))
            .with_body_divide(false);
        let lines = build_lines(&model, &style);
        assert_eq!(lines, vec!["┌───┐", "│ a │", "│ b │", "└───┘"]);
    }

    #[test]
    fn test_wrap_with_max_width() {
        let mut model = TableModel::new();
        model.add_row(cells(&["abcdef"]));
        let style = TableStyle::default()
            .with_align(Alignments::default().with_body(Align::Left))
            .with_cell_max_width(Some(5));
        let lines = build_lines(&model, &style);
        assert_eq!(lines, vec!["┌─────┐", "│ abc │\n│ def │", "└─────┘"]);
    }

    #[test]
    fn test_right_alignment_truncates_from_front() {
        let mut model = TableModel::new();
        model.set_head(cells(&["N"])).add_row(cells(&["42"]));
        let style = TableStyle::default().with_cell_auto_wrap(false);
        let lines = build_lines(&model, &style);
        assert_eq!(
            lines,
            vec!["┌───┐", "│ N │", "├───┤", "│ 2 │", "└───┘"]
        );
    }

    #[test]
    fn test_head_only_closes_flat() {
        let mut model = TableModel::new();
        model.set_head(cells(&["A", "B"]));
        let lines = build_lines(&model, &TableStyle::default());
        assert_eq!(lines, vec!["┌───┬───┐", "│ A │ B │", "└───────┘"]);
    }

    #[test]
    fn test_caption_only_above_body() {
        let mut model = TableModel::new();
        model.set_caption("T").add_row(cells(&["x"]));
        let lines = build_lines(&model, &TableStyle::default());
        assert_eq!(lines, vec!["┌───┐", "│ T │", "├───┤", "│ x │", "└───┘"]);
    }

    #[test]
    fn test_caption_head_body_transitions() {
        let mut model = TableModel::new();
        model
            .set_caption("T")
            .set_head(cells(&["A"]))
            .add_row(cells(&["1"]));
        let lines = build_lines(&model, &TableStyle::default());
        assert_eq!(
            lines,
            vec!["┌───┐", "│ T │", "├───┤", "│ A │", "├───┤", "│ 1 │", "└───┘"]
        );
    }

    #[test]
    fn test_caption_spans_the_column_grid() {
        let mut model = TableModel::new();
        model
            .set_caption("Rep")
            .set_head(cells(&["A", "B"]))
            .add_row(cells(&["1", "2"]));
        let lines = build_lines(&model, &TableStyle::default());
        assert_eq!(
            lines,
            vec![
                "┌───────┐",
                "│  Rep  │",
                "├───┬───┤",
                "│ A │ B │",
                "├───┼───┤",
                "│ 1 │ 2 │",
                "└───┴───┘"
            ]
        );
    }

    #[test]
    fn test_long_caption_wraps_over_inner_width() {
        let mut model = TableModel::new();
        model
            .set_caption("abcdefghijkl")
            .add_row(cells(&["wide cell"]));
        let style =
            TableStyle::default().with_align(Alignments::default().with_caption(Align::Left));
        let lines = build_lines(&model, &style);
        // inner = 11, usable = 9: two caption chunks
        assert_eq!(lines[0], "┌───────────┐");
        assert_eq!(lines[1], "│ abcdefghi │");
        assert_eq!(lines[2], "│ jkl       │");
        assert_eq!(lines[3], "├───────────┤");
    }

    #[test]
    fn test_uniform_line_width() {
        let mut model = TableModel::new();
        model
            .set_caption("A longer caption that wraps")
            .set_head(cells(&["col a", "b"]))
            .add_row(cells(&["some text", "x"]))
            .add_row(cells(&["y"]));
        let style = TableStyle::default().with_cell_max_width(Some(6));
        let lines = build_lines(&model, &style);
        let physical = physical_lines(&lines);
        let width = physical[0].chars().count();
        for line in &physical {
            assert_eq!(line.chars().count(), width, "line {line:?}");
        }
    }

    #[test]
    fn test_deterministic_output() {
        let mut model = TableModel::new();
        model
            .set_caption("t")
            .set_head(cells(&["a", "b"]))
            .add_row(cells(&["1", "22"]));
        let style = TableStyle::default();
        assert_eq!(build_lines(&model, &style), build_lines(&model, &style));
    }

    #[test]
    fn test_ascii_border() {
        let mut model = TableModel::new();
        model.set_head(cells(&["A"])).add_row(cells(&["1"]));
        let style = TableStyle::default().with_border(Border::ascii());
        let lines = build_lines(&model, &style);
        assert_eq!(lines, vec!["+---+", "| A |", "+---+", "| 1 |", "+---+"]);
    }

    #[test]
    fn test_calendar_shape() {
        let mut model = TableModel::new();
        model.set_caption("2022 January").set_head(cells(&[
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ]));
        let offset = 6;
        let mut day = 0;
        while day < 31 + offset {
            let mut row = Vec::new();
            for _ in 0..7 {
                let date = day - offset + 1;
                row.push(if (1..=31).contains(&date) {
                    date.to_string()
                } else {
                    String::new()
                });
                day += 1;
            }
            model.add_row(row);
        }
        let lines = build_lines(&model, &TableStyle::default());

        assert_eq!(lines.len(), 17);
        let physical = physical_lines(&lines);
        assert_eq!(physical.len(), 17);
        for line in &physical {
            assert_eq!(line.chars().count(), 72);
        }
        assert_eq!(
            lines[2],
            "├────────┬────────┬─────────┬───────────┬──────────┬────────┬──────────┤"
        );
        assert_eq!(
            lines[3],
            "│ Sunday │ Monday │ Tuesday │ Wednesday │ Thursday │ Friday │ Saturday │"
        );
        assert_eq!(
            lines[5],
            "│        │        │         │           │          │        │        1 │"
        );
        assert!(lines[1].contains("2022 January"));
    }
}
