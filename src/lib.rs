//! Responsive terminal listing for build records.
//!
//! Given a slice of [`Build`] records, the crate renders a human-readable
//! listing that adapts to the terminal it is printed on:
//!
//! 1. **Styled grid**: when a breakpoint tier fits the data, a borderless,
//!    padded five-column table clamped to that tier's width.
//! 2. **Unstyled blocks**: when no tier fits, or when stdout is not a
//!    terminal at all, one `Label: value` block per record.
//!
//! The decision lives in [`RenderPlan::decide`], kept apart from I/O so it
//! can be tested with injected widths; the terminal query itself sits
//! behind the [`TerminalProbe`] trait.
//!
//! # Example
//!
//! ```rust
//! use buildlist::{render_build_list, Build, BuildState, FixedWidth, Theme};
//! use chrono::Utc;
//!
//! let builds = vec![Build {
//!     id: "bld-1".into(),
//!     hash: "abc123".into(),
//!     state: BuildState::Success,
//!     prebuild_id: Some("pb-9".into()),
//!     created_at: Utc::now(),
//! }];
//!
//! let out = render_build_list(&builds, &FixedWidth(Some(120)), Theme::default_ref());
//! assert!(out.contains("bld-1"));
//! ```
//!
//! For the common case, [`list_builds`] probes the real terminal and
//! prints to stdout in one write.

pub mod build;
pub mod tabular;
pub mod term;
pub mod theme;
pub mod timefmt;
pub mod views;
pub mod width;

pub use build::{Build, BuildState};
pub use term::{FixedWidth, StdoutProbe, TerminalProbe};
pub use theme::Theme;
pub use views::{list_builds, render_build_list, HEADERS};
pub use width::{container_breakpoint, minimum_width, RenderPlan};
