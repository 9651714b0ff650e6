//! The responsive layout decision.
//!
//! Terminal widths are discretized into breakpoint tiers; the row data
//! yields a minimum width below which fixed columns would collide. The two
//! meet in [`RenderPlan::decide`], which returns an explicit tagged choice
//! so the strategy stays testable away from any real terminal.

use crate::tabular::display_width;
use crate::theme::Theme;

/// Breakpoint tiers in columns, smallest first. Widths below the smallest
/// tier map to 0, meaning "too narrow for any table".
pub const BREAKPOINTS: [usize; 3] = [60, 90, 120];

/// Discretizes a measured terminal width into a breakpoint tier.
///
/// Monotonic non-decreasing in the measured width.
pub fn container_breakpoint(terminal_width: usize) -> usize {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|&&tier| terminal_width >= tier)
        .copied()
        .unwrap_or(0)
}

/// The smallest terminal width at which the given content renders in fixed
/// columns without collision: the widest rendered value per column
/// (headers included) plus the fixed inter-column spacing.
pub fn minimum_width(headers: &[&str], rows: &[Vec<String>], column_gap: usize) -> usize {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(display_width(cell));
        }
    }
    widths.iter().sum::<usize>() + column_gap * widths.len().saturating_sub(1)
}

/// How the listing should be rendered for the current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPlan {
    /// Styled table, clamped to this display width.
    Styled {
        /// Target width for the grid: the breakpoint minus outer chrome.
        width: usize,
    },
    /// No tier fits the data; degrade to the width-independent form.
    Fallback,
}

impl RenderPlan {
    /// Picks the rendering strategy for the given rows and measured width.
    ///
    /// A tie, where the data needs exactly the breakpoint width, still
    /// fits and stays styled.
    pub fn decide(
        headers: &[&str],
        rows: &[Vec<String>],
        terminal_width: usize,
        theme: &Theme,
    ) -> RenderPlan {
        let breakpoint = container_breakpoint(terminal_width);
        if breakpoint == 0 {
            return RenderPlan::Fallback;
        }

        let min_width = minimum_width(headers, rows, theme.column_gap);
        if min_width > breakpoint {
            return RenderPlan::Fallback;
        }

        RenderPlan::Styled {
            width: breakpoint.saturating_sub(theme.table_chrome()),
        }
    }

    /// Returns true for the styled strategy.
    pub fn is_styled(&self) -> bool {
        matches!(self, RenderPlan::Styled { .. })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn breakpoint_monotonic(w1 in 0usize..300, w2 in 0usize..300) {
            let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
            prop_assert!(container_breakpoint(lo) <= container_breakpoint(hi));
        }

        #[test]
        fn fit_monotonic_in_width(
            cells in proptest::collection::vec(
                proptest::collection::vec("[a-z0-9 -]{0,40}", 3),
                0..5,
            ),
            w1 in 0usize..300,
            w2 in 0usize..300,
        ) {
            let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
            let theme = Theme::default();
            let headers = ["ID", "State", "Created"];
            let lo_plan = RenderPlan::decide(&headers, &cells, lo, &theme);
            let hi_plan = RenderPlan::decide(&headers, &cells, hi, &theme);
            if lo_plan.is_styled() {
                prop_assert!(
                    hi_plan.is_styled(),
                    "styled at {} but fallback at {}",
                    lo,
                    hi
                );
            }
        }
    }
}
