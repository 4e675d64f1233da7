// src/validator.rs
// Response shape validation

use serde_json::Value;

use crate::error::CaseFailure;
use crate::models::{ExpectedShape, ProbeResponse, SourceKind};

/// String fields required under `data`; `summaries` is checked apart.
pub const DATA_FIELDS: [&str; 3] = ["title", "sourceType", "transcript"];

/// Required keys under `data.summaries`.
pub const SUMMARY_FIELDS: [&str; 4] = ["bulletPoints", "topics", "keyTakeaways", "qa"];

/// Extra keys a YouTube envelope must carry.
pub const YOUTUBE_FIELDS: [&str; 2] = ["youtubeUrl", "videoId"];

/// A summary section counts as filled only above this trimmed length.
pub const MIN_SUMMARY_LEN: usize = 10;

/// Judge a received response against the case's expected shape.
pub fn validate(
    expect: &ExpectedShape,
    response: &ProbeResponse,
    preview_len: usize,
) -> Result<(), CaseFailure> {
    match expect {
        ExpectedShape::StatusOnly { statuses } => expect_status(statuses, response, preview_len),
        ExpectedShape::ErrorStatus { statuses } => {
            // A 2xx on a case that should be rejected is its own failure
            if (200..300).contains(&response.status) {
                return Err(CaseFailure::ErrorExpected {
                    got: response.status,
                });
            }
            expect_status(statuses, response, preview_len)
        }
        ExpectedShape::SuccessEnvelope { source } => {
            expect_status(&[200], response, preview_len)?;
            let value: Value = serde_json::from_str(&response.body)
                .map_err(|e| CaseFailure::InvalidJson(e.to_string()))?;
            check_envelope(&value, *source)
        }
    }
}

fn expect_status(
    expected: &[u16],
    response: &ProbeResponse,
    preview_len: usize,
) -> Result<(), CaseFailure> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    Err(CaseFailure::UnexpectedStatus {
        got: response.status,
        expected: expected.to_vec(),
        preview: preview(&response.body, preview_len),
    })
}

/// Walk the envelope and collect every missing or underfilled field in
/// one pass, so a single run reports the complete damage.
fn check_envelope(value: &Value, source: SourceKind) -> Result<(), CaseFailure> {
    let mut missing: Vec<String> = Vec::new();

    if !value.get("success").and_then(Value::as_bool).unwrap_or(false) {
        missing.push("success".to_string());
    }

    match value.get("data") {
        None => missing.push("data".to_string()),
        Some(data) => {
            for field in DATA_FIELDS {
                if !filled(data, field) {
                    missing.push(format!("data.{}", field));
                }
            }

            match data.get("summaries").filter(|s| s.is_object()) {
                None => missing.push("data.summaries".to_string()),
                Some(summaries) => {
                    for field in SUMMARY_FIELDS {
                        if !summary_filled(summaries, field) {
                            missing.push(format!("summaries.{}", field));
                        }
                    }
                }
            }

            if source == SourceKind::Youtube {
                for field in YOUTUBE_FIELDS {
                    if !filled(data, field) {
                        missing.push(format!("data.{}", field));
                    }
                }
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CaseFailure::Shape { missing })
    }
}

/// Present, a string, and not blank once trimmed.
fn filled(value: &Value, field: &str) -> bool {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

fn summary_filled(value: &Value, field: &str) -> bool {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(|s| s.trim().len() > MIN_SUMMARY_LEN)
        .unwrap_or(false)
}

/// Truncate a body for failure messages, keeping UTF-8 intact.
pub fn preview(body: &str, limit: usize) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(empty body)".to_string();
    }
    if trimmed.len() <= limit {
        return trimmed.to_string();
    }
    let mut end = limit;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &trimmed[..end], trimmed.len())
}
