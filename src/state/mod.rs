// src/state/mod.rs
use std::path::PathBuf;

use crate::api::{AnalysisResult, ServiceStatus};

/// Where the current (or last) submission stands. The status indicator and
/// the two panels are derived from this plus the held result/error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestPhase {
    Idle,
    Processing,
    Success,
    Error,
}

/// What a worker thread reports back once its request finishes. The token is
/// the submission counter value the request was started with; anything older
/// than the latest counter is dropped on arrival.
#[derive(Debug)]
pub struct Completion {
    pub token: u64,
    pub outcome: Result<AnalysisResult, String>,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub phase: RequestPhase,
    pub status_note: String,
    pub picked_file: Option<PathBuf>,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
    pub drag_active: bool,

    // Service reachability, filled in by the startup /status fetch
    pub service: Option<ServiceStatus>,
    pub service_note: Option<String>,

    latest_token: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
            status_note: "Ready".to_string(),
            picked_file: None,
            result: None,
            error_message: None,
            drag_active: false,
            service: None,
            service_note: None,
            latest_token: 0,
        }
    }

    /// Normalize a file-intake gesture into at most one submission. Empty
    /// selections are a silent no-op; of a multi-file selection only the
    /// first file is taken.
    pub fn accept_submission(&mut self, mut paths: Vec<PathBuf>) -> Option<(u64, PathBuf)> {
        if paths.is_empty() {
            return None;
        }
        if paths.len() > 1 {
            log::debug!("ignoring {} additional selected files", paths.len() - 1);
        }
        let path = paths.remove(0);
        let token = self.begin_submission(path.clone());
        Some((token, path))
    }

    fn begin_submission(&mut self, path: PathBuf) -> u64 {
        self.latest_token += 1;
        self.phase = RequestPhase::Processing;
        self.status_note = "Processing…".to_string();
        self.picked_file = Some(path);
        self.latest_token
    }

    /// Apply a worker's outcome, unless a newer submission (or a clear) has
    /// made it stale in the meantime.
    pub fn apply_completion(&mut self, completion: Completion) {
        if completion.token != self.latest_token {
            log::debug!(
                "discarding stale response for submission {} (latest is {})",
                completion.token,
                self.latest_token
            );
            return;
        }

        match completion.outcome {
            Ok(result) => {
                log::info!("{}: {} functions extracted", result.file, result.functions.len());
                self.result = Some(result);
                self.error_message = None;
                self.phase = RequestPhase::Success;
                self.status_note = "Done".to_string();
            }
            Err(message) => {
                log::warn!("extraction failed: {}", message);
                self.error_message = Some(message);
                self.result = None;
                self.phase = RequestPhase::Error;
                self.status_note = "Error".to_string();
            }
        }
    }

    /// Forget the picked file and everything rendered from it. Bumps the
    /// token so a still-running request cannot resurrect the old view.
    pub fn clear(&mut self) {
        self.latest_token += 1;
        self.phase = RequestPhase::Idle;
        self.status_note = "Ready".to_string();
        self.picked_file = None;
        self.result = None;
        self.error_message = None;
    }

    pub fn set_service(&mut self, outcome: Result<ServiceStatus, String>) {
        match outcome {
            Ok(status) => {
                log::debug!("service status: {}", status.status);
                self.service = Some(status);
                self.service_note = None;
            }
            Err(message) => {
                log::warn!("service status check failed: {}", message);
                self.service = None;
                self.service_note = Some(message);
            }
        }
    }
}
