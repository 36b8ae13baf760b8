mod demo;
mod outcome;
mod types;
mod validate;

pub use demo::demo_analysis;
pub use outcome::{fallback_outcome, interpret_analysis_response};
pub use types::{
    AnalysisOutcome, AnalysisResult, DoctorQuery, DoctorRecord, DoctorSearchResponse,
    ErrorResponse, FallbackReason, Prediction, SeverityLevel,
};
pub use validate::{
    normalize_pin_code, validate_analysis_inputs, validate_doctor_query, SubmissionError,
};
