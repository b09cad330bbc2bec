//! Routine synthesizer — builds a morning/evening/weekly routine from a base
//! template and the detected conditions.
//!
//! Conditions are applied in the order given. Each one splices its steps in at
//! index 2 of the morning and evening lists and may append a weekly step.
//! Rosacea is the exception: it replaces all three lists outright, so any
//! splice applied before it is lost while splices applied after it land in
//! the rosacea lists.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Three ordered lists of free-text steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub morning: Vec<String>,
    pub evening: Vec<String>,
    pub weekly: Vec<String>,
}

const BASE_MORNING: &[&str] = &[
    "Gentle cleanser",
    "Alcohol-free toner (optional)",
    "Lightweight moisturizer",
    "SPF 30+ sunscreen (crucial)",
];

const BASE_EVENING: &[&str] = &[
    "Oil-based or micellar cleanser to remove makeup/sunscreen",
    "Gentle water-based cleanser",
    "Treatment product",
    "Moisturizer",
];

const BASE_WEEKLY: &[&str] = &[
    "Gentle exfoliation 1-2 times per week",
    "Hydrating mask once weekly",
];

const ROSACEA_MORNING: &[&str] = &[
    "Lukewarm water rinse or extremely gentle cleanser",
    "Centella or green tea serum",
    "Barrier-strengthening moisturizer",
    "Mineral sunscreen SPF 30+",
];

const ROSACEA_EVENING: &[&str] = &[
    "Gentle micellar water or oil cleanser",
    "Lukewarm water rinse",
    "Centella, licorice, or azelaic acid product",
    "Rich barrier repair moisturizer",
];

const ROSACEA_WEEKLY: &[&str] = &["Gentle oat or centella mask", "No physical exfoliation"];

/// Position at which condition-specific morning/evening steps are inserted.
const SPLICE_AT: usize = 2;

/// How a single condition changes the routine.
enum Adjustment {
    Splice {
        morning: &'static str,
        evening: &'static str,
        weekly: Option<&'static str>,
    },
    Replace {
        morning: &'static [&'static str],
        evening: &'static [&'static str],
        weekly: &'static [&'static str],
    },
}

fn adjustment_for(condition_id: &str) -> Option<Adjustment> {
    let adjustment = match condition_id {
        "papules" | "pustules" => Adjustment::Splice {
            morning: "Benzoyl peroxide spot treatment (2.5-5%)",
            evening: "Adapalene gel or retinol",
            weekly: None,
        },
        "comedones" => Adjustment::Splice {
            morning: "Salicylic acid serum (1-2%)",
            evening: "Retinol or adapalene",
            weekly: Some("Salicylic acid mask once weekly"),
        },
        "nodular" | "cystic" => Adjustment::Splice {
            morning: "Azelaic acid (15-20%)",
            evening: "Prescription retinoid (if available)",
            weekly: Some("Consult dermatologist for cortisone injections"),
        },
        "hormonal" => Adjustment::Splice {
            morning: "Niacinamide serum (10%)",
            evening: "Azelaic acid or retinoid",
            weekly: Some("Consider spearmint tea daily (may help with androgen levels)"),
        },
        "rosacea" => Adjustment::Replace {
            morning: ROSACEA_MORNING,
            evening: ROSACEA_EVENING,
            weekly: ROSACEA_WEEKLY,
        },
        _ => return None,
    };
    Some(adjustment)
}

impl Routine {
    /// The routine every synthesis starts from.
    pub fn base() -> Self {
        Self {
            morning: to_owned_steps(BASE_MORNING),
            evening: to_owned_steps(BASE_EVENING),
            weekly: to_owned_steps(BASE_WEEKLY),
        }
    }

    fn apply(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Splice {
                morning,
                evening,
                weekly,
            } => {
                splice(&mut self.morning, morning);
                splice(&mut self.evening, evening);
                if let Some(step) = weekly {
                    self.weekly.push(step.to_string());
                }
            }
            Adjustment::Replace {
                morning,
                evening,
                weekly,
            } => {
                self.morning = to_owned_steps(morning);
                self.evening = to_owned_steps(evening);
                self.weekly = to_owned_steps(weekly);
            }
        }
    }
}

/// Builds a routine for the given condition ids. Unknown ids are ignored.
pub fn synthesize<S: AsRef<str>>(condition_ids: &[S]) -> Routine {
    let mut routine = Routine::base();

    for id in condition_ids {
        match adjustment_for(id.as_ref()) {
            Some(adjustment) => routine.apply(adjustment),
            None => debug!("No routine adjustment for condition '{}'", id.as_ref()),
        }
    }

    routine
}

fn splice(steps: &mut Vec<String>, step: &str) {
    let at = SPLICE_AT.min(steps.len());
    steps.insert(at, step.to_string());
}

fn to_owned_steps(steps: &[&str]) -> Vec<String> {
    steps.iter().map(|s| s.to_string()).collect()
}
