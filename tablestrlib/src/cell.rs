//! Cell formatting: fixed-width text with alignment and padding.
//!
//! The formatter is total: any combination of width, padding, and text
//! yields a string. Width is measured in `char`s (code points); wide
//! glyphs and combining marks are out of scope.

use crate::style::Align;

/// Format one cell to `max(0, width - 2*padding) + 2*padding` glyphs.
///
/// For the usual case `width >= 2*padding` that is exactly `width`. When
/// padding swallows the whole column the usable width collapses to 0 and
/// the cell is padding only — the text is dropped, by policy. `None` and
/// empty text both render as fill.
pub(crate) fn format_cell(
    text: Option<&str>,
    width: usize,
    padding: usize,
    placeholder: char,
    align: Align,
) -> String {
    if width == 0 {
        return String::new();
    }
    let usable = width.saturating_sub(padding * 2);

    let chars: Vec<char> = text.unwrap_or("").chars().collect();
    let kept: &[char] = if chars.len() > usable {
        match align {
            Align::Left => &chars[..usable],
            Align::Right => &chars[chars.len() - usable..],
            Align::Center => {
                // drop floor(diff/2) in front, the remainder behind
                let front = (chars.len() - usable) / 2;
                &chars[front..front + usable]
            }
        }
    } else {
        &chars
    };

    let gap = usable - kept.len();
    let (front, back) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => {
            // alternate by the current gap's parity: even goes in front,
            // odd behind — the leftover placeholder lands on the right
            let mut front = 0;
            let mut back = 0;
            while front + back < gap {
                if (gap - front - back) % 2 == 0 {
                    front += 1;
                } else {
                    back += 1;
                }
            }
            (front, back)
        }
    };

    let mut cell = String::with_capacity(usable + padding * 2);
    for _ in 0..padding + front {
        cell.push(placeholder);
    }
    cell.extend(kept);
    for _ in 0..back + padding {
        cell.push(placeholder);
    }
    cell
}
