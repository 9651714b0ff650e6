//! The build record and its lifecycle state.
//!
//! `Build` is the domain input to the list view: the crate only reads it,
//! never mutates or stores it. Optional fields render as empty strings
//! downstream, so absence is never an error condition.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single build record as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Build identifier.
    pub id: String,
    /// Hash of the build configuration that produced this build.
    pub hash: String,
    /// Current lifecycle state.
    pub state: BuildState,
    /// Identifier of the prebuild job that triggered this build, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prebuild_id: Option<String>,
    /// When the build was created.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildState {
    /// Queued, not yet picked up by a runner.
    Pending,
    /// Currently being built.
    Running,
    /// Completed successfully.
    Success,
    /// Failed with an error.
    Error,
    /// Built and pushed to the registry.
    Published,
    /// Marked for removal.
    Deleting,
}

impl BuildState {
    /// The textual form shown in the state column.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildState::Pending => "pending",
            BuildState::Running => "running",
            BuildState::Success => "success",
            BuildState::Error => "error",
            BuildState::Published => "published",
            BuildState::Deleting => "deleting",
        }
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
