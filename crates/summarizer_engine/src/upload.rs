use std::path::PathBuf;

use app_logging::app_debug;
use reqwest::multipart;
use serde::Deserialize;

use crate::{FailureKind, UploadError, UploadOutcome};

/// The one remote collaborator: a fixed summarization endpoint.
pub const SUMMARIZE_ENDPOINT: &str =
    "https://ai-tool-for-generating-patient-summary-gtna.onrender.com/summarize";

/// Multipart field name the endpoint expects the PDF under.
pub const FILE_FIELD: &str = "file";

/// Rendered when a 2xx response carries no usable summary text.
pub const NO_SUMMARY_FALLBACK: &str = "No summary generated.";

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Overridable only so tests can target a mock server.
    pub endpoint: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: SUMMARIZE_ENDPOINT.to_string(),
        }
    }
}

/// The file to upload: read from disk at upload time, never held in memory
/// between submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub path: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    summary: Option<String>,
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> Result<UploadOutcome, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        // No request timeout: settlement is bounded only by transport
        // defaults, and there is no retry policy on top.
        reqwest::Client::builder()
            .build()
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(&self, file: &UploadFile) -> Result<UploadOutcome, UploadError> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|err| {
            UploadError::new(
                FailureKind::FileRead,
                format!("could not read {}: {err}", file.path.display()),
            )
        })?;
        app_debug!(
            "POST {} file={} bytes={}",
            self.settings.endpoint,
            file.file_name,
            bytes.len()
        );

        let part = multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(PDF_MIME)
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))?;
        let form = multipart::Form::new().part(FILE_FIELD, part);

        let client = self.build_client()?;
        let response = client
            .post(&self.settings.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Failed to fetch summary ({status})"),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))?;
        let body: SummaryBody = serde_json::from_str(&text)
            .map_err(|err| UploadError::new(FailureKind::MalformedResponse, err.to_string()))?;

        // Empty string counts as "no summary", like a missing field.
        let summary = match body.summary {
            Some(text) if !text.is_empty() => text,
            _ => NO_SUMMARY_FALLBACK.to_string(),
        };

        Ok(UploadOutcome { summary })
    }
}
