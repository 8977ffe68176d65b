//! Multipart form for the analysis endpoints.
//!
//! Fields: `resumeText` (optional), `jobDescription`, and an optional `file`
//! upload whose extracted text takes precedence over `resumeText`.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::analysis::engine::AnalysisInput;
use crate::errors::AppError;
use crate::upload::extract::{extract_text, UploadedFile};

pub const RESUME_TEXT_FIELD: &str = "resumeText";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
    pub file: Option<UploadedFile>,
}

impl AnalyzeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error("Malformed form data", e))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                RESUME_TEXT_FIELD => form.resume_text = Some(read_text(field).await?),
                JOB_DESCRIPTION_FIELD => form.job_description = Some(read_text(field).await?),
                FILE_FIELD => {
                    let file_name = field.file_name().map(String::from);
                    let content_type = field.content_type().map(String::from);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error("Invalid file upload", e))?;
                    // Browsers submit an empty part when no file was chosen
                    if !data.is_empty() {
                        form.file = Some(UploadedFile {
                            file_name,
                            content_type,
                            data,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validates the form and resolves the resume text, extracting it from the
    /// uploaded file when one was given.
    pub async fn resolve(self) -> Result<AnalysisInput, AppError> {
        let resume_text = self.resume_text.filter(|t| !t.is_empty());
        if resume_text.is_none() && self.file.is_none() {
            return Err(AppError::Validation(
                "Please provide either resume text or upload a file.".to_string(),
            ));
        }

        let mut final_resume_text = resume_text.unwrap_or_default();
        if let Some(file) = self.file {
            if let Some(extracted) = extract_text(file).await {
                final_resume_text = extracted;
            }
        }

        if final_resume_text.trim().is_empty() {
            return Err(AppError::Validation(
                "No valid resume content found.".to_string(),
            ));
        }

        let job_description = self
            .job_description
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Job description is required.".to_string()))?;

        Ok(AnalysisInput {
            resume_text: final_resume_text,
            job_description,
        })
    }
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| multipart_error("Invalid form field", e))
}

/// Keeps the body-limit rejection distinct from malformed input.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {e}"))
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}
