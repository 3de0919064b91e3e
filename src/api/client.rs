// src/api/client.rs
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::types::{AnalysisResult, ServiceStatus};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx HTTP status. Only the status text is surfaced; the service
    /// promises no body on failures.
    #[error("Error: {text}")]
    Status { text: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Blocking client for the extraction service. Cheap to clone; callers hand
/// clones to worker threads so the UI thread never blocks on the network.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Upload one file as a single-field multipart body and parse the
    /// returned function list.
    pub fn extract(&self, file_name: &str, bytes: Vec<u8>) -> Result<AnalysisResult, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self.http.post(self.endpoint("extract")).multipart(form).send()?;
        Self::parse_json(response)
    }

    pub fn status(&self) -> Result<ServiceStatus, ApiError> {
        let response = self.http.get(self.endpoint("status")).send()?;
        Self::parse_json(response)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { text: status_text(status) });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
