//! Axum route handlers for CV-to-job comparison.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::handlers::{
    decode_blocking, decode_resume, run_blocking, text_preview, FileInfo, NO_CACHE_HEADERS,
};
use crate::analysis::{score_resume, ResumeScoreReport};
use crate::document::{ensure_meaningful, normalize_text};
use crate::errors::AppError;
use crate::matching::fit_scoring::MatchReport;
use crate::routes::upload::UploadForm;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub ats_analysis: ResumeScoreReport,
    pub comparison: MatchReport,
    pub file_info: FileInfo,
    pub text_preview: String,
    pub timestamp: DateTime<Utc>,
}

/// Job text from an uploaded `job_description_file`, falling back to the
/// `job_description` text field when no file was sent or it cannot be decoded.
async fn job_text(form: &mut UploadForm) -> Option<String> {
    if let Some(upload) = form.take_file("job_description_file") {
        if !upload.filename.is_empty() {
            let filename = upload.filename.clone();
            match decode_blocking(upload).await {
                Ok(document) if !document.text.is_empty() => return Some(document.text),
                Ok(_) => {}
                Err(e) => warn!("Ignoring undecodable job description file {filename}: {e}"),
            }
        }
    }

    form.text("job_description")
        .map(normalize_text)
        .filter(|text| !text.is_empty())
}

/// POST /api/compare
///
/// Multipart form with a `resume` file and a job description, either as the
/// `job_description` text field or a `job_description_file` upload. Returns
/// the resume's ATS analysis together with the fit report.
pub async fn handle_compare(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = UploadForm::read(multipart).await?;

    let (upload, document) = decode_resume(&mut form, state.config.min_text_chars).await?;

    let job_text = job_text(&mut form).await.unwrap_or_default();
    ensure_meaningful(&job_text, state.config.min_text_chars, "job description").map_err(
        |_| {
            AppError::Validation(format!(
                "Please provide a job description (at least {} characters). \
                 You can paste it as text or upload a file.",
                state.config.min_text_chars
            ))
        },
    )?;

    let file_info = FileInfo::new(&upload.filename, &document);
    info!(
        "Comparing {} ({} chars) against a {}-char job description using the {} scorer",
        file_info.filename,
        file_info.text_length,
        job_text.len(),
        state.fit_scorer.backend()
    );

    let fit_scorer = Arc::clone(&state.fit_scorer);
    let (document, ats_analysis, comparison) = run_blocking(move || {
        let ats_analysis = score_resume(&document.text, Some(&document.metadata));
        let comparison = fit_scorer.score(&document.text, &job_text);
        (document, ats_analysis, comparison)
    })
    .await?;
    info!(
        "Match score for {}: {} (ATS {})",
        file_info.filename, comparison.match_score, ats_analysis.overall_score
    );

    let response = CompareResponse {
        ats_analysis,
        comparison,
        file_info,
        text_preview: text_preview(&document.text),
        timestamp: Utc::now(),
    };

    Ok((NO_CACHE_HEADERS, Json(response)))
}
