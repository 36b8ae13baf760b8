use crate::demo::demo_analysis;
use crate::types::{AnalysisOutcome, AnalysisResult, ErrorResponse, FallbackReason};

/// Maps a settled HTTP exchange with the analysis service onto either a
/// parsed result or the reason the fallback must run. Transport failures
/// never reach this point; they become `FallbackReason::Network` at the
/// call site. Pure so both failure mappings are testable off the wasm
/// runtime.
pub fn interpret_analysis_response(
    ok: bool,
    status: u16,
    body: &str,
) -> Result<AnalysisResult, FallbackReason> {
    if !ok {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|payload| payload.error)
            .unwrap_or_else(|_| "Analysis failed".to_string());
        return Err(FallbackReason::Status { status, message });
    }

    serde_json::from_str::<AnalysisResult>(body)
        .map_err(|e| FallbackReason::Malformed(e.to_string()))
}

/// Demo substitute for a failed primary attempt. The synthesized result is
/// purely a function of the symptom text; the failure travels alongside it
/// instead of being swallowed.
pub fn fallback_outcome(symptoms: &str, reason: FallbackReason) -> AnalysisOutcome {
    AnalysisOutcome::Demo {
        result: demo_analysis(symptoms),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_extracted_on_failure_status() {
        let err = interpret_analysis_response(false, 422, r#"{"error": "image too small"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            FallbackReason::Status {
                status: 422,
                message: "image too small".to_string(),
            }
        );
    }

    #[test]
    fn failure_status_without_error_body_gets_the_generic_message() {
        let err = interpret_analysis_response(false, 500, "<html>gateway</html>").unwrap_err();
        assert_eq!(
            err,
            FallbackReason::Status {
                status: 500,
                message: "Analysis failed".to_string(),
            }
        );
    }

    #[test]
    fn unparseable_success_body_maps_to_malformed() {
        let err = interpret_analysis_response(true, 200, "{\"condition\": 42}").unwrap_err();
        assert!(matches!(err, FallbackReason::Malformed(_)));
    }

    #[test]
    fn well_formed_success_body_parses_through() {
        let body = r#"{
            "condition": "Vitiligo",
            "confidence": 65.8,
            "description": "desc",
            "severity": "Low",
            "suggestedDoctor": "Dermatologist",
            "symptomAnalysis": "analysis",
            "recommendations": ["see a doctor"],
            "predictions": [{"disease": "Vitiligo", "confidence": 0.658}]
        }"#;

        let result = interpret_analysis_response(true, 200, body).unwrap();
        assert_eq!(result.condition, "Vitiligo");
        assert_eq!(result.predictions[0].confidence, 0.658);
    }

    #[test]
    fn fallback_outcome_carries_the_reason_and_the_derived_result() {
        let reason = FallbackReason::Network("connection refused".to_string());
        let outcome = fallback_outcome("red itchy patch on forearm", reason.clone());

        assert!(outcome.is_demo());
        assert_eq!(outcome.result(), &demo_analysis("red itchy patch on forearm"));
        assert_eq!(outcome.result().condition, "Atopic Dermatitis");
        match outcome {
            AnalysisOutcome::Demo { reason: carried, .. } => assert_eq!(carried, reason),
            AnalysisOutcome::Remote(_) => panic!("expected the demo branch"),
        }
    }

    #[test]
    fn reasons_render_a_user_readable_summary() {
        assert_eq!(
            FallbackReason::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            FallbackReason::Status {
                status: 503,
                message: "down".to_string(),
            }
            .to_string(),
            "Server error: 503 - down"
        );
        assert_eq!(
            FallbackReason::Malformed("missing field".to_string()).to_string(),
            "Failed to parse response: missing field"
        );
    }
}
