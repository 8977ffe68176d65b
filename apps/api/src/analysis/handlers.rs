//! Axum route handlers for the Analysis API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::content::resume_length;
use crate::analysis::engine::{AnalysisInput, AnalysisResult};
use crate::analysis::report::{render_report, REPORT_FILE_NAME};
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::form::AnalyzeForm;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
}

/// Runs the configured scorer off the async runtime. A panicking scorer
/// surfaces as an internal error rather than tearing down the connection.
async fn run_analysis(state: &AppState, input: AnalysisInput) -> Result<AnalysisResult, AppError> {
    let scorer = state.scorer.clone();
    let backend = scorer.backend();
    let resume_chars = resume_length(&input.resume_text);

    let result = tokio::task::spawn_blocking(move || {
        scorer.analyze(&input.resume_text, &input.job_description)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("analysis task failed: {e}")))?;

    info!(
        backend,
        resume_chars,
        score = result.score,
        job_match = result.analysis.job_match.percentage,
        "Resume analysis completed"
    );

    Ok(result)
}

/// POST /api/analyze
///
/// Multipart form: `resumeText` and/or `file`, plus `jobDescription`.
/// Returns `{ "result": AnalysisResult }`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let input = AnalyzeForm::from_multipart(multipart).await?.resolve().await?;
    let result = run_analysis(&state, input).await?;
    Ok(Json(AnalyzeResponse { result }))
}

/// POST /api/analyze/report
///
/// Same form as `/api/analyze`; responds with the plain-text report as an attachment.
pub async fn handle_report(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let input = AnalyzeForm::from_multipart(multipart).await?.resolve().await?;
    let result = run_analysis(&state, input).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
        ),
    ];
    Ok((headers, render_report(&result)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::analysis::engine::{analyze, AnalysisResult, KeywordResumeScorer, ResumeScorer};
    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;
    use crate::upload::extract::PDF_PLACEHOLDER;

    const BOUNDARY: &str = "resume-analyzer-test-boundary";

    struct PanickingScorer;

    impl ResumeScorer for PanickingScorer {
        fn analyze(&self, _resume_text: &str, _job_description: &str) -> AnalysisResult {
            panic!("scorer exploded");
        }

        fn backend(&self) -> &'static str {
            "panicking"
        }
    }

    fn app_with(scorer: Arc<dyn ResumeScorer>) -> Router {
        build_router(AppState {
            config: Config::default(),
            scorer,
        })
    }

    fn app_with_upload_limit(max_upload_bytes: usize) -> Router {
        build_router(AppState {
            config: Config {
                max_upload_bytes,
                ..Config::default()
            },
            scorer: Arc::new(KeywordResumeScorer),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(KeywordResumeScorer))
    }

    struct FilePart<'a> {
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(file) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    file.file_name, file.content_type
                )
                .as_bytes(),
            );
            body.extend_from_slice(file.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn post(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const RESUME: &str =
        "I led a team and developed an app using Python and React. Achieved 20% growth.";
    const JD: &str = "Looking for Python, React, leadership, and teamwork.";

    #[tokio::test]
    async fn test_analyze_with_resume_text() {
        let body = multipart_body(&[("resumeText", RESUME), ("jobDescription", JD)], None);
        let (status, json) = send_json(app(), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::OK);
        let expected = serde_json::to_value(analyze(RESUME, JD)).unwrap();
        assert_eq!(json["result"], expected);
        assert_eq!(json["result"]["score"], 100);
    }

    #[tokio::test]
    async fn test_analyze_with_text_file_upload() {
        let body = multipart_body(
            &[("jobDescription", JD)],
            Some(FilePart {
                file_name: "resume.txt",
                content_type: "text/plain",
                data: RESUME.as_bytes(),
            }),
        );
        let (status, json) = send_json(app(), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"]["analysis"]["jobMatch"]["percentage"], 100);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_is_analyzed_as_placeholder() {
        let body = multipart_body(
            &[("jobDescription", JD)],
            Some(FilePart {
                file_name: "resume.pdf",
                content_type: "application/pdf",
                data: b"not a pdf",
            }),
        );
        let (status, json) = send_json(app(), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::OK);
        let expected = serde_json::to_value(analyze(PDF_PLACEHOLDER, JD)).unwrap();
        assert_eq!(json["result"], expected);
    }

    #[tokio::test]
    async fn test_missing_resume_is_bad_request() {
        let body = multipart_body(&[("jobDescription", JD)], None);
        let (status, json) = send_json(app(), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Please provide either resume text or upload a file."
        );
    }

    #[tokio::test]
    async fn test_missing_job_description_is_bad_request() {
        let body = multipart_body(&[("resumeText", RESUME)], None);
        let (status, json) = send_json(app(), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "Job description is required.");
    }

    #[tokio::test]
    async fn test_blank_resume_is_bad_request() {
        let body = multipart_body(&[("resumeText", "  \n "), ("jobDescription", JD)], None);
        let (status, json) = send_json(app(), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "No valid resume content found.");
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let resume = "x".repeat(10_000);
        let body = multipart_body(
            &[("resumeText", resume.as_str()), ("jobDescription", JD)],
            None,
        );
        let (status, json) =
            send_json(app_with_upload_limit(1024), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_oversized_file_is_payload_too_large() {
        let data = vec![b'a'; 10_000];
        let body = multipart_body(
            &[("jobDescription", JD)],
            Some(FilePart {
                file_name: "resume.txt",
                content_type: "text/plain",
                data: &data,
            }),
        );
        let (status, json) =
            send_json(app_with_upload_limit(1024), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_scorer_panic_is_internal_error() {
        let body = multipart_body(&[("resumeText", RESUME), ("jobDescription", JD)], None);
        let (status, json) =
            send_json(app_with(Arc::new(PanickingScorer)), post("/api/analyze", body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert!(!json.to_string().contains("scorer exploded"));
    }

    #[tokio::test]
    async fn test_report_download() {
        let body = multipart_body(
            &[("resumeText", "Contact: a@b.com"), ("jobDescription", "kubernetes, docker, aws")],
            None,
        );
        let response = app()
            .oneshot(post("/api/analyze/report", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-disposition"],
            "attachment; filename=\"resume-analysis-report.txt\""
        );
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Resume Analysis Report\n"));
        assert!(text.contains("Score: 82.00/100"));
        assert!(text.contains("- cloud: aws, docker, kubernetes"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, json) = send_json(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "resume-analyzer-api");
    }
}
