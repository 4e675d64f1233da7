// src/error.rs
// Failure taxonomy for probe cases and run setup

use std::time::Duration;
use thiserror::Error;

/// Why a single case did not pass. These are recorded into the case's
/// `TestResult`, never propagated out of the runner.
#[derive(Debug, Clone, Error)]
pub enum CaseFailure {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("network error: {0}")]
    Network(String),

    #[error("could not build the request: {0}")]
    InvalidRequest(String),

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("unexpected status {got} (expected one of {expected:?}): {preview}")]
    UnexpectedStatus {
        got: u16,
        expected: Vec<u16>,
        preview: String,
    },

    #[error("expected an error status, got {got}")]
    ErrorExpected { got: u16 },

    #[error("missing or empty fields: {}", .missing.join(", "))]
    Shape { missing: Vec<String> },

    #[error("probe panicked while executing the case")]
    Panicked,
}

/// Problems that abort the run before any case executes.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("unknown suite '{0}', expected \"full\" or \"smoke\"")]
    UnknownSuite(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
