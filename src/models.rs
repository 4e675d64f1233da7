// src/models.rs
// Define models here

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kind of source material the collaborator is asked to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    Audio,
    Youtube,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::Audio => "audio",
            SourceKind::Youtube => "youtube",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One field of a multipart/form-data body.
#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    File {
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone)]
pub enum Payload {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<MultipartField>),
}

/// Everything needed to send one request, independent of the HTTP client.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub payload: Payload,
    pub timeout: Duration,
}

/// What a case accepts as a passing response.
#[derive(Debug, Clone)]
pub enum ExpectedShape {
    /// Any of the listed statuses passes, the body is not inspected.
    StatusOnly { statuses: Vec<u16> },
    /// Status 200 plus the full success envelope for the given source kind.
    SuccessEnvelope { source: SourceKind },
    /// The request is supposed to be rejected; any listed error status passes.
    ErrorStatus { statuses: Vec<u16> },
}

/// A single probe case. `critical` decides whether a failure here
/// fails the whole run's exit code.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub critical: bool,
    pub request: RequestSpec,
    pub expect: ExpectedShape,
}

/// Status line and body of a received response, decoupled from the
/// transport so validation stays a pure function.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub passed: bool,
    pub message: String,
    pub elapsed_seconds: f64,
    pub time_created: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn from_results(results: Vec<TestResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    /// Percentage of passing cases. An empty run counts as fully passing.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.passed as f64 / self.total as f64 * 100.0
    }

    pub fn failing_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.test_name.as_str())
            .collect()
    }
}

// Wire shape of the collaborator's success envelope. The probes only
// ever read these fields, but the structs double as builders for tests.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessEnvelope {
    pub success: bool,
    pub data: ProcessData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessData {
    pub title: String,
    pub source_type: String,
    pub transcript: String,
    pub summaries: Summaries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summaries {
    pub bullet_points: String,
    pub topics: String,
    pub key_takeaways: String,
    pub qa: String,
}
