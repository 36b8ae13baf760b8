use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Payload returned by the analysis service, and synthesized locally when the
/// service is unreachable. `confidence` is on a 0-100 scale; the entries in
/// `predictions` use 0-1. The two scales are intentionally distinct.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub condition: String,
    pub confidence: f32,
    pub description: String,
    pub severity: String,
    pub suggested_doctor: String,
    pub symptom_analysis: String,
    pub recommendations: Vec<String>,
    pub predictions: Vec<Prediction>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f32,
}

/// Outcome of one analyze submission. The fallback branch carries the reason
/// the primary path failed so callers can surface it instead of relying on
/// error control flow.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    Remote(AnalysisResult),
    Demo {
        result: AnalysisResult,
        reason: FallbackReason,
    },
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Remote(result) => result,
            AnalysisOutcome::Demo { result, .. } => result,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AnalysisOutcome::Demo { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Display)]
pub enum FallbackReason {
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "Server error: {} - {}", status, message)]
    Status { status: u16, message: String },
    #[display(fmt = "Failed to parse response: {}", _0)]
    Malformed(String),
}

/// Coarse severity bucket used to style the results card. The service emits
/// an open-ended string; classification is by case-insensitive substring with
/// Low as the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
}

impl SeverityLevel {
    pub fn classify(severity: &str) -> Self {
        let lower = severity.to_lowercase();
        if lower.contains("high") {
            SeverityLevel::High
        } else if lower.contains("moderate") {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Low
        }
    }
}

/// Provider record as the result grid expects it. The mock responder emits a
/// looser shape (string id, distance, availability, no city), so everything
/// beyond the headline fields is defaulted rather than required. Whether that
/// mismatch should be tightened is an open contract question; decoding stays
/// tolerant on purpose.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub name: String,
    pub specialty: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub google_maps_link: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub working_hours: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorQuery {
    pub pin_code: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DoctorSearchResponse {
    pub doctors: Vec<DoctorRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification_is_substring_based() {
        assert_eq!(SeverityLevel::classify("High"), SeverityLevel::High);
        assert_eq!(SeverityLevel::classify("very HIGH risk"), SeverityLevel::High);
        assert_eq!(SeverityLevel::classify("Moderate"), SeverityLevel::Moderate);
        assert_eq!(SeverityLevel::classify("Low"), SeverityLevel::Low);
        assert_eq!(SeverityLevel::classify(""), SeverityLevel::Low);
        assert_eq!(SeverityLevel::classify("unknown"), SeverityLevel::Low);
    }

    #[test]
    fn doctor_record_tolerates_mock_responder_shape() {
        // Shape emitted by the mock lookup endpoint: no city, extra fields.
        let body = r#"{
            "id": "1",
            "name": "Dr. Sarah Johnson",
            "specialty": "Dermatology",
            "address": "123 Medical Center Dr",
            "phone": "(555) 123-4567",
            "rating": 4.8,
            "distance": "0.5 miles",
            "availability": "Available today"
        }"#;

        let record: DoctorRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.name, "Dr. Sarah Johnson");
        assert_eq!(record.city, "");
        assert_eq!(record.rating, Some(4.8));
        assert_eq!(record.google_maps_link, None);
        assert_eq!(record.working_hours, None);
    }

    #[test]
    fn analysis_result_uses_camel_case_on_the_wire() {
        let result = AnalysisResult {
            condition: "Vitiligo".into(),
            confidence: 65.8,
            description: "desc".into(),
            severity: "Low".into(),
            suggested_doctor: "Dermatologist".into(),
            symptom_analysis: "analysis".into(),
            recommendations: vec![],
            predictions: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"suggestedDoctor\""));
        assert!(json.contains("\"symptomAnalysis\""));
    }
}
