use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{ItemKind, ReviewState};

/// Opaque project identifier. Many work items may share one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a work item: the item number is only unique within a project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ItemKey {
    pub project: ProjectId,
    pub iid: u64,
}

impl ItemKey {
    #[must_use]
    pub const fn new(project: u64, iid: u64) -> Self {
        Self {
            project: ProjectId(project),
            iid,
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.project, self.iid)
    }
}

/// A pending review or assignment entry requiring the user's attention.
///
/// Created once per fetch; only `score` is mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WorkItem {
    pub key: ItemKey,
    pub target_url: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub state: ReviewState,
    pub draft: bool,
    pub kind: ItemKind,
    /// `group/project` path, for display.
    pub project_path: String,
    /// Username of the target's author, when the source reports one.
    pub author: Option<String>,
    #[serde(default)]
    pub score: f64,
}

impl WorkItem {
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.key.project
    }

    /// Whether the item is still open and not a draft.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.state.is_open() && !self.draft
    }
}

/// A commit in a project's history window. Only the committer identity matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub committer_email: String,
}

/// A file path touched by a merge request's changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub new_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(state: ReviewState, draft: bool) -> WorkItem {
        WorkItem {
            key: ItemKey::new(7, 42),
            target_url: "https://gitlab.example.com/g/p/-/merge_requests/42".into(),
            title: "Bump deps".into(),
            body: String::new(),
            created_at: Utc::now(),
            state,
            draft,
            kind: ItemKind::MergeRequest,
            project_path: "g/p".into(),
            author: None,
            score: 0.0,
        }
    }

    #[test]
    fn item_key_display() {
        assert_eq!(ItemKey::new(7, 42).to_string(), "7!42");
    }

    #[test]
    fn item_keys_order_by_project_then_iid() {
        let mut keys = vec![ItemKey::new(2, 1), ItemKey::new(1, 9), ItemKey::new(1, 3)];
        keys.sort();
        assert_eq!(
            keys,
            vec![ItemKey::new(1, 3), ItemKey::new(1, 9), ItemKey::new(2, 1)]
        );
    }

    #[test]
    fn actionable_requires_open_and_not_draft() {
        assert!(item(ReviewState::Opened, false).is_actionable());
        assert!(!item(ReviewState::Opened, true).is_actionable());
        assert!(!item(ReviewState::Merged, false).is_actionable());
    }

    #[test]
    fn work_item_serialization_roundtrip() {
        let original = item(ReviewState::Opened, false);
        let json = serde_json::to_string(&original).unwrap();
        let recovered: WorkItem = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, original);
    }

    #[test]
    fn project_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProjectId(15)).unwrap();
        assert_eq!(json, "15");
    }
}
