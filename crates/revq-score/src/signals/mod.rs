//! Independent scoring heuristics.
//!
//! Each signal reads work items (plus, for `commit` and `diff`, records from
//! the item source) and returns a sparse [`ContributionMap`](crate::ContributionMap).
//! Signals share no state apart from the per-run [`CommitRatioCache`](commit::CommitRatioCache).

pub mod age;
pub mod commit;
pub mod diff;
pub mod mention;
pub mod urgency;

pub use age::age;
pub use commit::commit;
pub use diff::diff;
pub use mention::mention;
pub use urgency::urgency;
