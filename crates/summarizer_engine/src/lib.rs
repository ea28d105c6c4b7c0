//! Summarizer engine: file upload IO and effect execution.
mod engine;
mod types;
mod upload;

pub use engine::EngineHandle;
pub use types::{EngineEvent, FailureKind, UploadError, UploadOutcome};
pub use upload::{
    ReqwestUploader, UploadFile, UploadSettings, Uploader, FILE_FIELD, NO_SUMMARY_FALLBACK,
    SUMMARIZE_ENDPOINT,
};
