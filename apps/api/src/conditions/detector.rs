//! Condition detector — finds catalog conditions mentioned in free text.
//!
//! Matching is plain case-insensitive substring containment on the display
//! name forms and the id. There is no word-boundary check, so short ids can
//! match inside unrelated words ("nodularity" reports `nodular`).

use tracing::debug;

use crate::conditions::catalog::{SkinCondition, CATALOG};

/// Returns the ids of every catalog condition mentioned in `text`,
/// in catalog order.
pub fn detect(text: &str) -> Vec<&'static str> {
    let haystack = text.to_lowercase();

    let detected: Vec<&'static str> = CATALOG
        .iter()
        .filter(|condition| is_mentioned(condition, &haystack))
        .map(|condition| condition.id)
        .collect();

    debug!("Detected {} condition(s): {:?}", detected.len(), detected);
    detected
}

fn is_mentioned(condition: &SkinCondition, haystack: &str) -> bool {
    haystack.contains(&condition.id.to_lowercase())
        || condition
            .name_forms()
            .iter()
            .any(|form| haystack.contains(form.as_str()))
}
