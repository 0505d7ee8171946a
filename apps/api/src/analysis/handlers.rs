//! Axum route handlers for resume analysis.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::analysis::{score_resume, ResumeScoreReport};
use crate::document::{ensure_meaningful, extract_document, ExtractedDocument};
use crate::errors::AppError;
use crate::routes::upload::{UploadForm, UploadedFile};
use crate::state::AppState;

const PREVIEW_CHARS: usize = 300;

/// Reports are computed per request and must never be cached.
pub const NO_CACHE_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub format: String,
    pub text_length: usize,
    pub word_count: usize,
}

impl FileInfo {
    pub fn new(filename: &str, document: &ExtractedDocument) -> Self {
        Self {
            filename: filename.to_string(),
            format: document.format.as_str().to_string(),
            text_length: document.text.chars().count(),
            word_count: document.text.split_whitespace().count(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: ResumeScoreReport,
    pub file_info: FileInfo,
    /// Lets the user confirm the right file was parsed.
    pub text_preview: String,
    pub timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers shared with the comparison endpoint
// ────────────────────────────────────────────────────────────────────────────

pub fn text_preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Pulls the `resume` file out of the form and decodes it off the async runtime.
pub async fn decode_resume(
    form: &mut UploadForm,
    min_text_chars: usize,
) -> Result<(UploadedFile, ExtractedDocument), AppError> {
    let upload = form.take_file("resume").ok_or_else(|| {
        AppError::Validation("No resume file uploaded. Please upload a file.".to_string())
    })?;
    if upload.filename.is_empty() {
        return Err(AppError::Validation("No file selected.".to_string()));
    }

    let document = decode_blocking(upload.clone()).await?;
    ensure_meaningful(&document.text, min_text_chars, "resume file")?;
    Ok((upload, document))
}

pub async fn decode_blocking(upload: UploadedFile) -> Result<ExtractedDocument, AppError> {
    run_blocking(move || extract_document(&upload.filename, &upload.bytes)).await?
}

/// Runs CPU-bound decoding or scoring on the blocking pool.
pub async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(e.into()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Multipart form with a `resume` file. Returns the overall ATS score and the
/// six per-check breakdowns.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let (upload, document) = decode_resume(&mut form, state.config.min_text_chars).await?;

    let file_info = FileInfo::new(&upload.filename, &document);
    info!(
        "Analyzing {}: {} chars, {} words",
        file_info.filename, file_info.text_length, file_info.word_count
    );

    let (document, analysis) = run_blocking(move || {
        let analysis = score_resume(&document.text, Some(&document.metadata));
        (document, analysis)
    })
    .await?;
    info!("ATS score for {}: {}", file_info.filename, analysis.overall_score);

    let response = AnalyzeResponse {
        analysis,
        file_info,
        text_preview: text_preview(&document.text),
        timestamp: Utc::now(),
    };

    Ok((NO_CACHE_HEADERS, Json(response)))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::build_router;
    use crate::routes::test_support::{json_body, multipart_request, test_state};

    const RESUME: &str = "Jane Doe\njane@example.com | Austin, TX\n\nExperience\nSoftware Engineer, 2018 - 2023\n- Built Rust services\n\nEducation\nBachelor of Science, State University\n\nSkills\nRust, Docker, Linux";

    #[tokio::test]
    async fn test_analyze_returns_six_sections() {
        let app = build_router(test_state());
        let request = multipart_request("/api/analyze", &[("resume", Some("cv.txt"), RESUME)]);
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
        let body = json_body(response).await;
        assert_eq!(body["sections"].as_array().unwrap().len(), 6);
        assert_eq!(body["file_info"]["format"], "txt");
        assert!(body["overall_score"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_missing_resume_is_bad_request() {
        let app = build_router(test_state());
        let request = multipart_request("/api/analyze", &[("other", None, "value")]);
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let app = build_router(test_state());
        let request = multipart_request("/api/analyze", &[("resume", Some("cv.docx"), RESUME)]);
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_too_short_text_is_rejected() {
        let app = build_router(test_state());
        let request = multipart_request("/api/analyze", &[("resume", Some("cv.txt"), "tiny")]);
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_run_blocking_returns_value_and_maps_panics() {
        assert_eq!(run_blocking(|| 6 * 7).await.unwrap(), 42);

        let result: Result<(), AppError> = run_blocking(|| panic!("scorer crashed")).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_text_preview_truncates() {
        assert_eq!(text_preview("short"), "short");
        let long = "x".repeat(301);
        let preview = text_preview(&long);
        assert_eq!(preview.len(), 303);
        assert!(preview.ends_with("..."));
    }
}
