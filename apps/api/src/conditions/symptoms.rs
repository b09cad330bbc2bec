//! Symptom lookup — maps an observed symptom phrase to candidate conditions.

use crate::conditions::catalog;

/// Symptom phrase → candidate condition ids. Some candidates (`fungal`,
/// `sensitive`) have no catalog entry yet and are dropped on lookup.
const SYMPTOM_TO_CONDITIONS: &[(&str, &[&str])] = &[
    ("red bumps without pus", &["papules", "rosacea"]),
    ("white or yellow heads", &["pustules"]),
    ("black dots", &["comedones"]),
    ("deep painful bumps", &["nodular", "cystic"]),
    ("jawline breakouts", &["hormonal"]),
    ("forehead small bumps", &["comedones", "fungal"]),
    ("facial redness", &["rosacea", "sensitive"]),
    ("painful cysts", &["cystic", "nodular"]),
];

/// Known symptom phrases, in table order.
pub fn known_symptoms() -> impl Iterator<Item = &'static str> {
    SYMPTOM_TO_CONDITIONS.iter().map(|(symptom, _)| *symptom)
}

/// Returns the catalog condition ids associated with `symptom`.
/// Matching is on the whole trimmed phrase, ignoring case.
pub fn conditions_for_symptom(symptom: &str) -> Vec<&'static str> {
    let needle = symptom.trim();

    SYMPTOM_TO_CONDITIONS
        .iter()
        .find(|(phrase, _)| phrase.eq_ignore_ascii_case(needle))
        .map(|(_, ids)| {
            ids.iter()
                .copied()
                .filter(|id| catalog::find(id).is_some())
                .collect()
        })
        .unwrap_or_default()
}
