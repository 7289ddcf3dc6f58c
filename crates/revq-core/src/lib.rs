//! # revq-core
//!
//! Core types shared across revq crates:
//! - [`WorkItem`] and its identity ([`ItemKey`], [`ProjectId`])
//! - Review state and target kind enums
//! - Auxiliary records fetched for scoring ([`CommitRecord`], [`ChangedFile`])
//! - The [`ItemSource`] contract implemented by data sources

pub mod entities;
pub mod enums;
pub mod source;

pub use entities::{ChangedFile, CommitRecord, ItemKey, ProjectId, WorkItem};
pub use enums::{ItemKind, ReviewState};
pub use source::ItemSource;
