// src/client.rs
// HTTP dispatch against the target service

use std::time::Duration;

use reqwest::multipart;
use tracing::debug;

use crate::config::Config;
use crate::error::{CaseFailure, SetupError};
use crate::models::{FieldValue, Method, MultipartField, Payload, ProbeResponse, TestCase};

/// Thin wrapper over a shared `reqwest::Client` bound to one base URL.
#[derive(Clone)]
pub struct ProbeClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProbeClient {
    pub fn new(config: &Config) -> Result<Self, SetupError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.target.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one case's request and collect the raw response. Transport
    /// problems come back as `CaseFailure`, never as a panic, so the
    /// runner can record them like any other verdict.
    pub async fn execute(&self, case: &TestCase) -> Result<ProbeResponse, CaseFailure> {
        let url = format!("{}{}", self.base_url, case.request.path);
        let mut request = match case.request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };

        request = match &case.request.payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(body),
            Payload::Multipart(fields) => request.multipart(build_form(fields)?),
        };

        debug!(name = %case.name, %url, "sending probe request");
        let response = request
            .timeout(case.request.timeout)
            .send()
            .await
            .map_err(|e| classify(e, case.request.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, case.request.timeout))?;

        debug!(name = %case.name, status, bytes = body.len(), "probe response received");
        Ok(ProbeResponse { status, body })
    }
}

fn build_form(fields: &[MultipartField]) -> Result<multipart::Form, CaseFailure> {
    let mut form = multipart::Form::new();
    for field in fields {
        form = match &field.value {
            FieldValue::Text(text) => form.text(field.name.clone(), text.clone()),
            FieldValue::File {
                filename,
                content_type,
                bytes,
            } => {
                let part = multipart::Part::bytes(bytes.clone())
                    .file_name(filename.clone())
                    .mime_str(content_type)
                    .map_err(|e| CaseFailure::InvalidRequest(e.to_string()))?;
                form.part(field.name.clone(), part)
            }
        };
    }
    Ok(form)
}

/// Timeouts carry the case's budget; everything else is a generic
/// network failure.
fn classify(err: reqwest::Error, timeout: Duration) -> CaseFailure {
    if err.is_timeout() {
        CaseFailure::Timeout(timeout)
    } else {
        CaseFailure::Network(err.to_string())
    }
}
