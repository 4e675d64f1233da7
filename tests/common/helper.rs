// Test helper functions
use std::time::Duration;

use anyhow::Result;
use horus::cases::{self, PROCESS_PATH};
use horus::client::ProbeClient;
use horus::config::{Config, HttpConfig, ReportConfig, RunnerConfig, TargetConfig};
use horus::models::{
    ExpectedShape, Method, Payload, ProcessData, ProcessEnvelope, RequestSpec, RunSummary,
    SourceKind, Summaries, TestCase,
};
use horus::runner::Runner;
use serde_json::json;

/// Build a config pointing at a test target, with short timeouts.
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        target: TargetConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        },
        http: HttpConfig {
            connect_timeout_secs: 5,
        },
        runner: RunnerConfig {
            suite: "full".to_string(),
            max_in_flight: 1,
        },
        report: ReportConfig {
            body_preview_len: 200,
        },
    }
}

/// Run a built-in suite against the given base URL and hand back the
/// cases next to their summary.
#[allow(dead_code)]
pub async fn run_suite(base_url: &str, suite_name: &str) -> Result<(Vec<TestCase>, RunSummary)> {
    let config = test_config(base_url);
    let suite = cases::suite(suite_name)?;
    let client = ProbeClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to build probe client: {}", e))?;
    let runner = Runner::new(1, config.report.body_preview_len);
    let summary = runner.run(&suite, &client).await;
    Ok((suite, summary))
}

/// A text-processing case the mock recognizes, with a short timeout.
#[allow(dead_code)]
pub fn text_case(name: &str, text: &str, critical: bool) -> TestCase {
    TestCase {
        name: name.to_string(),
        critical,
        request: RequestSpec {
            method: Method::Post,
            path: PROCESS_PATH.to_string(),
            payload: Payload::Json(json!({
                "text": text,
                "sourceType": "text",
            })),
            timeout: Duration::from_secs(10),
        },
        expect: ExpectedShape::SuccessEnvelope {
            source: SourceKind::Text,
        },
    }
}

/// A complete success envelope for the given source type. Every
/// summary section is comfortably above the minimum length.
#[allow(dead_code)]
pub fn full_envelope(source: &str, transcript: &str) -> ProcessEnvelope {
    let youtube = source == "youtube";
    ProcessEnvelope {
        success: true,
        data: ProcessData {
            title: "Generated Notes".to_string(),
            source_type: source.to_string(),
            transcript: transcript.to_string(),
            summaries: Summaries {
                bullet_points: "- AI is reshaping classrooms worldwide".to_string(),
                topics: "Artificial intelligence, education, assessment".to_string(),
                key_takeaways: "Personalized learning improves outcomes".to_string(),
                qa: "Q: What changed? A: Grading is now automated".to_string(),
            },
            youtube_url: youtube
                .then(|| "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            video_id: youtube.then(|| "dQw4w9WgXcQ".to_string()),
        },
    }
}
