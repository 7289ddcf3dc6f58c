//! Review state and target kind enums.
//!
//! Both enums accept unknown wire values via `#[serde(other)]` so a new
//! upstream state never fails a whole fetch.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ReviewState
// ---------------------------------------------------------------------------

/// Review state of the target behind a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    Opened,
    Closed,
    Merged,
    Locked,
    #[serde(other)]
    Other,
}

impl ReviewState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
            Self::Locked => "locked",
            Self::Other => "other",
        }
    }

    /// Whether the target still awaits action.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opened)
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// Kind of target a work item points at.
///
/// Only merge requests carry a changeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ItemKind {
    MergeRequest,
    Issue,
    #[serde(other)]
    Other,
}

impl ItemKind {
    /// GitLab `target_type` name, the same string serde writes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MergeRequest => "MergeRequest",
            Self::Issue => "Issue",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn has_changeset(self) -> bool {
        matches!(self, Self::MergeRequest)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
