//! Mention-position signal.
//!
//! Being mentioned early in a mention list, or being one of few people
//! mentioned, both raise the score:
//!
//! ```text
//! order = '@' glyphs before the last exact "@username"
//! total = '@' glyphs in the body
//! score = 30 * (1 - order / total) + 50 / total
//! ```
//!
//! `order` and `total` count raw `@` characters, not parsed mention tokens, so
//! an e-mail address in the body shifts both.

use revq_core::WorkItem;

use crate::ContributionMap;

const POSITION_WEIGHT: f64 = 30.0;
const EXCLUSIVITY_WEIGHT: f64 = 50.0;

/// Score every item whose body mentions `username`. Others get no entry.
#[must_use]
pub fn mention(items: &[WorkItem], username: &str) -> ContributionMap {
    items
        .iter()
        .filter_map(|item| mention_score(&item.body, username).map(|score| (item.key, score)))
        .collect()
}

/// Score a single body, `None` when `@username` never appears as a whole handle.
#[must_use]
pub fn mention_score(body: &str, username: &str) -> Option<f64> {
    if username.is_empty() {
        return None;
    }

    let needle = format!("@{username}");
    let position = body
        .rmatch_indices(needle.as_str())
        .map(|(index, _)| index)
        .find(|&index| !continues_handle(&body[index + needle.len()..]))?;

    let order = count_at_glyphs(&body[..position]);
    let total = count_at_glyphs(body);
    Some(POSITION_WEIGHT.mul_add(1.0 - order / total, EXCLUSIVITY_WEIGHT / total))
}

/// Whether `rest` starts with a handle character (`[A-Za-z0-9_-]`).
///
/// Non-ASCII letters end a handle: `@hiromuさん` mentions `hiromu`.
fn continues_handle(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

#[allow(clippy::cast_precision_loss)]
fn count_at_glyphs(text: &str) -> f64 {
    text.matches('@').count() as f64
}
