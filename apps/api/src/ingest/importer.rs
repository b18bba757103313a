//! Document importer: turns an uploaded resume document into candidates.
//!
//! The screener never parses PDFs itself. A remote collaborator does, and the
//! screener only consumes the resulting array. `AppState` holds an
//! `Arc<dyn DocumentImporter>` chosen at startup from configuration.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{multipart, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::ingest::{candidates_from_value, IngestError};
use crate::models::candidate::Candidate;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Document import is not configured")]
    Unconfigured,

    #[error("Upload failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Import service returned status {0}")]
    Status(u16),

    #[error("PDF parsed but result is not an array")]
    NotAnArray,

    #[error("Import service returned malformed candidates: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait DocumentImporter: Send + Sync {
    async fn import(&self, file_name: &str, content: Bytes) -> Result<Vec<Candidate>, ImportError>;
}

/// Used when no `IMPORT_SERVICE_URL` is set.
pub struct UnconfiguredImporter;

#[async_trait]
impl DocumentImporter for UnconfiguredImporter {
    async fn import(&self, _file_name: &str, _content: Bytes) -> Result<Vec<Candidate>, ImportError> {
        Err(ImportError::Unconfigured)
    }
}

/// Posts the document as multipart field `file` and expects a JSON array of
/// candidate-shaped objects back. Single attempt, no retry.
pub struct RemoteDocumentImporter {
    client: Client,
    endpoint: String,
}

impl RemoteDocumentImporter {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl DocumentImporter for RemoteDocumentImporter {
    async fn import(&self, file_name: &str, content: Bytes) -> Result<Vec<Candidate>, ImportError> {
        let part = multipart::Part::bytes(content.to_vec())
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        debug!(endpoint = %self.endpoint, "Import service responded");
        decode_import_response(body)
    }
}

fn decode_import_response(body: Value) -> Result<Vec<Candidate>, ImportError> {
    candidates_from_value(body).map_err(|e| match e {
        IngestError::NotAnArray => ImportError::NotAnArray,
        IngestError::InvalidJson(inner) => ImportError::Malformed(inner.to_string()),
    })
}
