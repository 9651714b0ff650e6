//! The style palette injected into rendering.
//!
//! All styling and spacing constants live in one immutable value that the
//! caller passes to the renderers, rather than ambient globals. The default
//! palette is built once and shared for the lifetime of the process.
//!
//! # Example
//!
//! ```rust
//! use buildlist::Theme;
//! use console::Style;
//!
//! let theme = Theme {
//!     header: Style::new().magenta().bold(),
//!     ..Theme::default()
//! };
//! assert_eq!(theme.table_chrome(), Theme::default().table_chrome());
//! ```

use console::Style;
use once_cell::sync::Lazy;

/// Styles and fixed spacing for the build listing.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the header row.
    pub header: Style,
    /// Style for the identifier column.
    pub id: Style,
    /// Style for the remaining data cells.
    pub cell: Style,
    /// Outer left/right padding around the styled table, in columns.
    pub horizontal_padding: usize,
    /// Spacing between columns, in columns.
    pub column_gap: usize,
    /// Fixed pad appended to identifiers so adjacent property output
    /// stays visually aligned with other views.
    pub id_trailing_pad: &'static str,
}

impl Theme {
    /// Horizontal chrome around the grid: outer padding on both sides
    /// plus one column of slack for the terminal's own cursor cell.
    pub fn table_chrome(&self) -> usize {
        2 * self.horizontal_padding + 1
    }

    /// The shared default theme.
    pub fn default_ref() -> &'static Theme {
        static DEFAULT: Lazy<Theme> = Lazy::new(Theme::default);
        &DEFAULT
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header: Style::new().cyan().bold(),
            id: Style::new().bold(),
            cell: Style::new().dim(),
            horizontal_padding: 2,
            column_gap: 2,
            id_trailing_pad: "  ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_accounts_for_both_sides_and_slack() {
        let theme = Theme::default();
        assert_eq!(theme.table_chrome(), 2 * theme.horizontal_padding + 1);
    }

    #[test]
    fn default_ref_is_shared() {
        let a = Theme::default_ref();
        let b = Theme::default_ref();
        assert!(std::ptr::eq(a, b));
    }
}
