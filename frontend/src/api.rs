use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{
    fallback_outcome, interpret_analysis_response, AnalysisOutcome, AnalysisResult, DoctorQuery,
    DoctorRecord, DoctorSearchResponse, ErrorResponse, FallbackReason,
};

/// Base URL of the external analysis service. Overridable at build time so a
/// deployed bundle can point somewhere other than a local dev server.
fn analyze_endpoint() -> String {
    let base = option_env!("DERMBOT_API_URL").unwrap_or("http://localhost:5000");
    format!("{}/analyze", base)
}

/// Runs one analysis attempt. The caller always gets a displayable outcome:
/// either the service's own result, or a locally synthesized demo result
/// tagged with the reason the primary path failed. Inputs are validated
/// before this is called; no retry is attempted.
pub async fn run_analysis(file: &GlooFile, symptoms: &str) -> AnalysisOutcome {
    match request_analysis(file, symptoms).await {
        Ok(result) => AnalysisOutcome::Remote(result),
        Err(reason) => {
            error!(format!("Analysis error: {}", reason));
            fallback_outcome(symptoms, reason)
        }
    }
}

async fn request_analysis(
    file: &GlooFile,
    symptoms: &str,
) -> Result<AnalysisResult, FallbackReason> {
    let form_data = web_sys::FormData::new().unwrap();
    form_data.append_with_blob("file", file.as_ref()).unwrap();
    form_data.append_with_str("symptoms", symptoms).unwrap();

    let request = Request::post(&analyze_endpoint())
        .body(form_data)
        .map_err(|e| FallbackReason::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| FallbackReason::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FallbackReason::Network(e.to_string()))?;

    // Successful payloads are trusted as-is; whatever deserializes is shown.
    interpret_analysis_response(ok, status, &body)
}

/// Doctor lookup has no demo fallback; any failure surfaces as an error and
/// the caller clears its result list.
pub async fn find_doctors(query: &DoctorQuery) -> Result<Vec<DoctorRecord>, String> {
    let request = Request::post("/api/find-doctors")
        .json(query)
        .map_err(|e| e.to_string())?;

    let response = request.send().await.map_err(|e| e.to_string())?;

    if !response.ok() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Search failed with status {}", response.status()));
        return Err(message);
    }

    let body = response
        .json::<DoctorSearchResponse>()
        .await
        .map_err(|e| e.to_string())?;
    Ok(body.doctors)
}
