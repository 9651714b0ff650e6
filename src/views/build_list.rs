//! The build listing view.
//!
//! Builds are projected to fixed five-column rows, then rendered one of
//! two ways: a styled grid clamped to the breakpoint that fits the
//! terminal, or an unstyled per-record block listing when no tier fits or
//! when stdout has no terminal at all. The user always gets some listing;
//! degradation is silent and never an error.

use crate::build::Build;
use crate::tabular::Grid;
use crate::term::{StdoutProbe, TerminalProbe};
use crate::theme::Theme;
use crate::timefmt::format_created;
use crate::width::RenderPlan;

/// Column labels, in rendering order.
pub const HEADERS: [&str; 5] = ["ID", "Configuration hash", "State", "Prebuild ID", "Created"];

/// Projects one build into its five display strings.
///
/// Pure and infallible: an absent prebuild id becomes an empty string.
/// The identifier carries the theme's fixed trailing pad so the column
/// lines up with adjacent property output in other views.
pub fn project(build: &Build, theme: &Theme) -> Vec<String> {
    vec![
        format!("{}{}", build.id, theme.id_trailing_pad),
        build.hash.clone(),
        build.state.to_string(),
        build.prebuild_id.clone().unwrap_or_default(),
        format_created(build.created_at),
    ]
}

/// Renders rows without any width-dependent alignment: one block per
/// record, one `Label: value` line per field, a blank line between
/// records. Readable at any terminal size and complete in every field.
pub fn render_unstyled(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            HEADERS
                .iter()
                .zip(row)
                .map(|(label, value)| format!("{}: {}", label, value.trim_end()))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders the listing for the terminal described by `probe`.
///
/// An unmeasurable terminal (redirected output) short-circuits straight to
/// the unstyled form; the width policy is never consulted in that case.
pub fn render_build_list(builds: &[Build], probe: &dyn TerminalProbe, theme: &Theme) -> String {
    let rows: Vec<Vec<String>> = builds.iter().map(|b| project(b, theme)).collect();

    let Some(terminal_width) = probe.width() else {
        return render_unstyled(&rows);
    };

    match RenderPlan::decide(&HEADERS, &rows, terminal_width, theme) {
        RenderPlan::Styled { width } => {
            let grid = Grid::new(&HEADERS, theme).render(&rows, width);
            indent(&grid, theme.horizontal_padding)
        }
        RenderPlan::Fallback => render_unstyled(&rows),
    }
}

/// Lists the given builds on stdout.
///
/// One write per invocation; failures degrade visually rather than
/// propagate, so there is nothing for the caller to handle.
pub fn list_builds(builds: &[Build]) {
    println!(
        "{}",
        render_build_list(builds, &StdoutProbe, Theme::default_ref())
    );
}

/// Prefixes every non-empty line with the outer padding.
fn indent(text: &str, padding: usize) -> String {
    let pad = " ".repeat(padding);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
