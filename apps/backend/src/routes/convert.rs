//! Conversion endpoints

use axum::extract::Multipart;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{ApiError, Result};
use crate::models::{AnalyzeResponse, QuestionSummary};
use crate::services::docx;

/// MIME type for generated word-processing documents.
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// File name offered for the converted artifact.
const DOWNLOAD_FILENAME: &str = "HASIL_CBT.docx";

/// POST /api/convert
/// Convert an uploaded exam document into the CBT table layout
pub async fn convert(mut multipart: Multipart) -> Result<Response> {
    // 1. Pull the upload out of the form and gate the file type
    let upload = read_upload(&mut multipart).await?;

    // 2. Extract paragraphs and rebuild the question records
    let paragraphs = docx::extract_paragraphs(&upload)?;
    let questions = cbt_core::parse(&paragraphs);
    if questions.is_empty() {
        return Err(ApiError::NoQuestionsFound);
    }
    tracing::info!("parsed {} questions from upload", questions.len());

    // 3. Render the table blocks and pack the output container
    let blocks = cbt_core::generate(&questions);
    let bytes = docx::write_tables(&blocks)?;

    let headers = [
        (header::CONTENT_TYPE, DOCX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// POST /api/analyze
/// Report what the parser recognized without generating a document
pub async fn analyze(mut multipart: Multipart) -> Result<Json<AnalyzeResponse>> {
    let upload = read_upload(&mut multipart).await?;

    let paragraphs = docx::extract_paragraphs(&upload)?;
    let questions = cbt_core::parse(&paragraphs);
    if questions.is_empty() {
        return Err(ApiError::NoQuestionsFound);
    }

    Ok(Json(AnalyzeResponse {
        question_count: questions.len(),
        questions: questions.iter().map(QuestionSummary::from_question).collect(),
    }))
}

/// Read the first file field from the form. File-type gatekeeping happens
/// here, before the container is ever opened: legacy binary `.doc` files
/// never reach the parser.
async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        check_file_name(&file_name)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        return Ok(bytes.to_vec());
    }

    Err(ApiError::BadRequest("missing file upload".to_string()))
}

fn check_file_name(file_name: &str) -> Result<()> {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".docx") {
        return Ok(());
    }
    if lower.ends_with(".doc") {
        return Err(ApiError::UnsupportedFormat(
            "legacy .doc (Word 97-2003) files are not supported, save the file as .docx first"
                .to_string(),
        ));
    }
    Err(ApiError::UnsupportedFormat(format!(
        "expected a .docx upload, got '{file_name}'"
    )))
}
