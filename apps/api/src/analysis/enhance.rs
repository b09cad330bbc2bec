//! Narrative enhancement — appends treatment details and a synthesized
//! routine to a model's skin analysis when it mentions catalog conditions.

use std::fmt::Write;

use serde::Serialize;
use tracing::debug;

use crate::conditions::catalog;
use crate::conditions::detector::detect;
use crate::routine::synthesizer::synthesize;

/// Topical treatments listed per condition in the treatment block.
const INGREDIENTS_SHOWN: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct EnhancedAnalysis {
    pub enhanced: String,
    pub detected_conditions: Vec<&'static str>,
}

/// Returns the analysis unchanged when no condition is detected.
pub fn enhance_analysis(analysis: &str) -> EnhancedAnalysis {
    let detected = detect(analysis);
    if detected.is_empty() {
        debug!("No conditions detected, analysis left unchanged");
        return EnhancedAnalysis {
            enhanced: analysis.to_string(),
            detected_conditions: detected,
        };
    }

    let routine = synthesize(&detected);
    let mut out = String::with_capacity(analysis.len() + 1024);

    // fmt::Write into a String cannot fail.
    let _ = writeln!(out, "\n{analysis}\n\n---\n");
    let _ = writeln!(out, "🔬 DETAILED TREATMENT INFORMATION:\n");
    let _ = writeln!(
        out,
        "Based on the analysis of your skin, here's more specific information about the identified condition(s):"
    );
    for condition in detected.iter().filter_map(|id| catalog::find(id)) {
        let ingredients = condition
            .treatments
            .topical
            .iter()
            .take(INGREDIENTS_SHOWN)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "\n• {}:\n  {}\n\n  Recommended ingredients: {}",
            condition.name, condition.description, ingredients
        );
    }

    let _ = writeln!(out, "\n💧 PERSONALIZED SKINCARE ROUTINE:");
    for (heading, steps) in [
        ("Morning", &routine.morning),
        ("Evening", &routine.evening),
        ("Weekly", &routine.weekly),
    ] {
        let _ = writeln!(out, "\n{heading}:");
        for step in steps {
            let _ = writeln!(out, "• {step}");
        }
    }

    let _ = writeln!(
        out,
        "\n⚠️ Remember: This is personalized based on the image analysis, but a dermatologist can provide the most accurate diagnosis and treatment plan for your specific needs."
    );

    EnhancedAnalysis {
        enhanced: out,
        detected_conditions: detected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_when_nothing_detected() {
        let analysis = "Your skin looks clear and well hydrated.";
        let result = enhance_analysis(analysis);
        assert_eq!(result.enhanced, analysis);
        assert!(result.detected_conditions.is_empty());
    }

    #[test]
    fn test_appends_treatment_and_routine_blocks() {
        let analysis = "You have a few pustules on the forehead.";
        let result = enhance_analysis(analysis);

        assert_eq!(result.detected_conditions, vec!["pustules"]);
        assert!(result.enhanced.starts_with("\nYou have a few pustules on the forehead."));
        assert!(result.enhanced.contains("🔬 DETAILED TREATMENT INFORMATION:"));
        assert!(result.enhanced.contains(
            "Recommended ingredients: Benzoyl peroxide (5-10%), Salicylic acid (2%), Sulfur treatments"
        ));
        assert!(result.enhanced.contains("• Benzoyl peroxide spot treatment (2.5-5%)"));
        assert!(result.enhanced.contains("⚠️ Remember:"));
    }

    #[test]
    fn test_routine_block_follows_detected_conditions() {
        let result = enhance_analysis("Signs of rosacea around the nose");
        assert!(result.enhanced.contains("• Mineral sunscreen SPF 30+"));
        assert!(!result.enhanced.contains("• SPF 30+ sunscreen (crucial)"));
    }

    #[test]
    fn test_each_detected_condition_listed_once() {
        let result = enhance_analysis("papules and cystic acne, more papules");
        assert_eq!(result.enhanced.matches("• Inflammatory Papules:").count(), 1);
        assert_eq!(result.enhanced.matches("• Cystic Acne:").count(), 1);
    }
}
