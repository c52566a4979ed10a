//! Column layout: count and width planning.
//!
//! Widths include both padding sides. The header, when present, overrides
//! the body-derived width for its columns rather than combining with it —
//! the header is the authoritative sizing row.

use crate::model::TableModel;
use crate::style::TableStyle;

/// Planned column layout for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub column_count: usize,
    /// Per-column width in glyphs, padding included
    pub widths: Vec<usize>,
    /// The single column was sized to the bare caption (no padding); the
    /// caption section then also renders without padding
    pub sole_caption: bool,
}

impl Layout {
    /// Full line width: columns plus a separator on both outer sides and
    /// one between each pair.
    pub fn table_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.column_count + 1
    }
}

/// Compute the column count and widths for a model under a style.
pub(crate) fn plan(model: &TableModel, style: &TableStyle) -> Layout {
    let padding = style.cell_padding;

    let mut column_count = usize::from(model.has_caption());
    if let Some(head) = &model.head {
        column_count = column_count.max(head.len());
    }
    for row in &model.body {
        column_count = column_count.max(row.len());
    }

    let mut widths = vec![0; column_count];
    for row in &model.body {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count() + padding * 2);
        }
    }
    if let Some(head) = &model.head {
        for (i, cell) in head.iter().enumerate() {
            widths[i] = cell.chars().count() + padding * 2;
        }
    }

    let mut sole_caption = false;
    if let Some(caption) = &model.caption {
        if model.has_caption() && column_count == 1 && widths[0] == 0 {
            widths[0] = caption.chars().count();
            sole_caption = true;
        }
    }

    if let Some(max) = style.cell_max_width {
        for width in &mut widths {
            *width = (*width).min(max);
        }
    }

    Layout {
        column_count,
        widths,
        sole_caption,
    }
}
