//! Terminal views over build records.

mod build_list;

pub use build_list::{list_builds, project, render_build_list, render_unstyled, HEADERS};
