// src/api/mod.rs
pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{ApiClient, ApiError};
pub use types::{AnalysisResult, FunctionInfo, ServiceStatus};
