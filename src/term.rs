//! Terminal width as an injectable capability.
//!
//! The width query is the only environment dependency in the crate, so it
//! sits behind a trait: production code probes the real terminal, tests
//! inject fixed widths or simulate redirected output without a TTY.

/// Source of the current terminal width.
pub trait TerminalProbe {
    /// The terminal width in columns, or `None` when stdout has no
    /// attached terminal (e.g. output piped to a file). Absence is a
    /// signal to degrade rendering, not an error.
    fn width(&self) -> Option<usize>;
}

/// Probes the terminal attached to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProbe;

impl TerminalProbe for StdoutProbe {
    fn width(&self) -> Option<usize> {
        terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
    }
}

/// A probe reporting a preset width, or no terminal at all.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub Option<usize>);

impl TerminalProbe for FixedWidth {
    fn width(&self) -> Option<usize> {
        self.0
    }
}
