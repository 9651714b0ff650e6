//! Borderless, width-clamped grid rendering.
//!
//! The grid draws a header row and data rows in fixed columns separated by
//! padding only; no border or divider lines. Column widths start from the
//! widest content per column (headers included) and shrink, truncating
//! cells, until the grid fits the requested display width.

use crate::theme::Theme;

use super::util::{display_width, pad_right, truncate_end};

const ELLIPSIS: &str = "…";

/// A fixed-column grid bound to a header set and a theme.
///
/// Rows passed to [`Grid::render`] must have exactly as many cells as there
/// are headers; anything else is a caller bug, checked by a debug
/// assertion rather than silently truncated.
#[derive(Debug, Clone)]
pub struct Grid<'a> {
    headers: &'a [&'a str],
    theme: &'a Theme,
}

impl<'a> Grid<'a> {
    /// Creates a grid for the given header set.
    pub fn new(headers: &'a [&'a str], theme: &'a Theme) -> Self {
        Grid { headers, theme }
    }

    /// Renders the header and all rows, clamped to `target_width` display
    /// columns. Identical inputs always produce identical output.
    pub fn render(&self, rows: &[Vec<String>], target_width: usize) -> String {
        for row in rows {
            debug_assert_eq!(
                row.len(),
                self.headers.len(),
                "row arity must match header arity"
            );
        }

        let widths = self.fit_widths(rows, target_width);

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(self.format_line(self.headers.iter().copied(), &widths, |_| &self.theme.header));
        for row in rows {
            lines.push(self.format_line(row.iter().map(String::as_str), &widths, |col| {
                if col == 0 {
                    &self.theme.id
                } else {
                    &self.theme.cell
                }
            }));
        }

        lines.join("\n")
    }

    /// Content-driven column widths, shrunk until the grid fits.
    fn fit_widths(&self, rows: &[Vec<String>], target_width: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| display_width(h))
            .collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(display_width(cell));
            }
        }

        let gaps = self.theme.column_gap * widths.len().saturating_sub(1);
        let budget = target_width.saturating_sub(gaps);

        // Take columns from the widest first; stop once nothing can give.
        while widths.iter().sum::<usize>() > budget {
            let Some((idx, &w)) = widths
                .iter()
                .enumerate()
                .max_by_key(|&(_, w)| *w)
            else {
                break;
            };
            if w <= 1 {
                break;
            }
            widths[idx] = w - 1;
        }

        widths
    }

    fn format_line<'s>(
        &self,
        cells: impl Iterator<Item = &'s str>,
        widths: &[usize],
        style_for: impl Fn(usize) -> &'a console::Style,
    ) -> String {
        let gap = " ".repeat(self.theme.column_gap);
        let last = widths.len().saturating_sub(1);

        cells
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(0);
                let clipped = truncate_end(cell, width, ELLIPSIS);
                // The last column carries no trailing pad, so short rows
                // never widen the line past the clamp.
                let fitted = if i == last {
                    clipped
                } else {
                    pad_right(&clipped, width)
                };
                style_for(i).apply_to(fitted).to_string()
            })
            .collect::<Vec<_>>()
            .join(&gap)
    }
}
