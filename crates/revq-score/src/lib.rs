//! # revq-score
//!
//! Multi-signal priority scoring for pending work items.
//!
//! Pipeline:
//! 1. [`filter`] drops closed and draft items (and duplicate identities)
//! 2. Five independent [`signals`] each produce a sparse [`ContributionMap`]
//! 3. [`aggregate`] sums the maps per item and writes the total back
//! 4. [`rank`] stable-sorts by score, descending
//!
//! [`Scorer`] drives the whole run against any [`revq_core::ItemSource`].

pub mod aggregate;
pub mod contribution;
pub mod filter;
pub mod pipeline;
pub mod rank;
pub mod signals;

mod error;

pub use contribution::ContributionMap;
pub use error::ScoreError;
pub use pipeline::{Breakdown, Ranking, Scorer, ScoringOptions, Signal, SignalScores};
pub use signals::commit::CommitRatioCache;
