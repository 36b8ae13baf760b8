use derive_more::Display;

/// Precondition failures surfaced to the user before any request is issued.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum SubmissionError {
    #[display(fmt = "Please upload an image of the affected skin area.")]
    MissingImage,
    #[display(fmt = "Please describe your symptoms for accurate analysis.")]
    MissingSymptoms,
    #[display(fmt = "Please enter a pin code or city name.")]
    MissingLocation,
}

/// Gate for the analyze form: an image must be attached and the symptom text
/// must be non-empty after trimming. Callers only go to the network on Ok.
pub fn validate_analysis_inputs(has_image: bool, symptoms: &str) -> Result<(), SubmissionError> {
    if !has_image {
        return Err(SubmissionError::MissingImage);
    }
    if symptoms.trim().is_empty() {
        return Err(SubmissionError::MissingSymptoms);
    }
    Ok(())
}

/// Gate for the doctor search form: at least one of pin code or city.
pub fn validate_doctor_query(pin_code: &str, city: &str) -> Result<(), SubmissionError> {
    if pin_code.is_empty() && city.is_empty() {
        return Err(SubmissionError::MissingLocation);
    }
    Ok(())
}

/// Indian pin codes are six digits; everything else typed into the field is
/// stripped as the user goes.
pub fn normalize_pin_code(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_rejected_before_symptoms() {
        assert_eq!(
            validate_analysis_inputs(false, "itchy rash"),
            Err(SubmissionError::MissingImage)
        );
        assert_eq!(
            validate_analysis_inputs(false, ""),
            Err(SubmissionError::MissingImage)
        );
    }

    #[test]
    fn whitespace_only_symptoms_rejected() {
        assert_eq!(
            validate_analysis_inputs(true, "   \n\t "),
            Err(SubmissionError::MissingSymptoms)
        );
        assert_eq!(validate_analysis_inputs(true, " itchy "), Ok(()));
    }

    #[test]
    fn doctor_query_needs_at_least_one_field() {
        assert_eq!(
            validate_doctor_query("", ""),
            Err(SubmissionError::MissingLocation)
        );
        assert_eq!(validate_doctor_query("110001", ""), Ok(()));
        assert_eq!(validate_doctor_query("", "Mumbai"), Ok(()));
    }

    #[test]
    fn pin_code_keeps_first_six_digits() {
        assert_eq!(normalize_pin_code("110001"), "110001");
        assert_eq!(normalize_pin_code("11 00 01 23"), "110001");
        assert_eq!(normalize_pin_code("abc12x3"), "123");
        assert_eq!(normalize_pin_code(""), "");
    }
}
