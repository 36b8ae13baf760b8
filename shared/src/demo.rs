use crate::types::{AnalysisResult, Prediction};

/// Ordered keyword rules for the offline demo result. First match wins, so
/// "red itchy patch" resolves through the first rule even though "patch"
/// appears later in the table.
const DEMO_RULES: &[(&[&str], &str, f32)] = &[
    (&["itch", "red"], "Atopic Dermatitis", 72.3),
    (&["white", "patch"], "Vitiligo", 65.8),
    (&["acne", "pimple"], "Acne Vulgaris", 78.2),
    (&["scale", "flaky"], "Psoriasis Vulgaris", 70.1),
];

const DEFAULT_CONDITION: (&str, f32) = ("Contact Dermatitis", 68.5);

/// Synthesizes a placeholder result from the symptom text when the analysis
/// service is unavailable. Purely a function of the input, so every failure
/// path lands on a reproducible result.
pub fn demo_analysis(symptoms: &str) -> AnalysisResult {
    let lower = symptoms.to_lowercase();

    let (condition, confidence) = DEMO_RULES
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|&(_, condition, confidence)| (condition, confidence))
        .unwrap_or(DEFAULT_CONDITION);

    AnalysisResult {
        condition: condition.to_string(),
        confidence,
        description: format!("Possible condition: {}. This is not a diagnosis.", condition),
        severity: "Low".to_string(),
        suggested_doctor: "Dermatologist".to_string(),
        symptom_analysis: format!(
            "Based on your description of \"{}\", the AI model suggests this could be {}. \
             The visual features and symptoms you described are commonly associated with \
             this condition. However, only a qualified dermatologist can provide an \
             accurate diagnosis.",
            symptoms, condition
        ),
        recommendations: vec![
            "This is a DEMO analysis - connect the analysis backend for real AI results."
                .to_string(),
            "This is not a medical diagnosis.".to_string(),
            "Consult a dermatologist for confirmation.".to_string(),
            "Avoid self-medicating.".to_string(),
            "Monitor the area for changes.".to_string(),
        ],
        // Not deduplicated when the chosen condition is Contact Dermatitis;
        // matches the upstream demo payload.
        predictions: vec![
            Prediction {
                disease: condition.to_string(),
                confidence: confidence / 100.0,
            },
            Prediction {
                disease: "Contact Dermatitis".to_string(),
                confidence: 0.15,
            },
            Prediction {
                disease: "Eczema".to_string(),
                confidence: 0.08,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itch_matches_atopic_dermatitis() {
        let result = demo_analysis("constant ITCHING at night");
        assert_eq!(result.condition, "Atopic Dermatitis");
        assert_eq!(result.confidence, 72.3);
    }

    #[test]
    fn first_rule_wins_over_later_keywords() {
        // "red" and "itch" hit rule one before "patch" can reach rule two.
        let result = demo_analysis("red itchy patch on forearm");
        assert_eq!(result.condition, "Atopic Dermatitis");
    }

    #[test]
    fn white_patches_match_vitiligo() {
        let result = demo_analysis("small white patches appeared");
        assert_eq!(result.condition, "Vitiligo");
        assert_eq!(result.confidence, 65.8);
    }

    #[test]
    fn acne_and_scaling_rules() {
        assert_eq!(demo_analysis("pimples on my chin").condition, "Acne Vulgaris");
        assert_eq!(
            demo_analysis("flaky skin on elbows").condition,
            "Psoriasis Vulgaris"
        );
    }

    #[test]
    fn unmatched_text_falls_back_to_contact_dermatitis() {
        let result = demo_analysis("a strange mark on my shoulder");
        assert_eq!(result.condition, "Contact Dermatitis");
        assert_eq!(result.confidence, 68.5);
    }

    #[test]
    fn severity_is_always_low() {
        assert_eq!(demo_analysis("itchy").severity, "Low");
        assert_eq!(demo_analysis("whatever").severity, "Low");
    }

    #[test]
    fn top_prediction_mirrors_confidence_on_unit_scale() {
        let result = demo_analysis("red rash");
        assert_eq!(result.predictions.len(), 3);
        assert_eq!(result.predictions[0].disease, result.condition);
        assert_eq!(result.predictions[0].confidence, result.confidence / 100.0);
        assert_eq!(result.predictions[1].disease, "Contact Dermatitis");
        assert_eq!(result.predictions[1].confidence, 0.15);
        assert_eq!(result.predictions[2].disease, "Eczema");
        assert_eq!(result.predictions[2].confidence, 0.08);
    }

    #[test]
    fn default_condition_duplicates_second_prediction_label() {
        // Known quirk carried over from the upstream demo payload.
        let result = demo_analysis("nothing recognizable");
        assert_eq!(result.predictions[0].disease, "Contact Dermatitis");
        assert_eq!(result.predictions[1].disease, "Contact Dermatitis");
    }

    #[test]
    fn symptom_text_is_quoted_in_the_narrative() {
        let result = demo_analysis("burning sensation");
        assert!(result.symptom_analysis.contains("\"burning sensation\""));
        assert!(result
            .recommendations
            .iter()
            .any(|rec| rec.contains("DEMO analysis")));
    }
}
