// src/cases.rs
// Built-in probe suites against the summarization API

use std::io::Cursor;
use std::time::Duration;

use serde_json::json;

use crate::error::SetupError;
use crate::models::{
    ExpectedShape, FieldValue, Method, MultipartField, Payload, RequestSpec, SourceKind, TestCase,
};

pub const PROCESS_PATH: &str = "/api/process";

const TEST_TEXT: &str = "Artificial intelligence is transforming education through personalized \
    learning, automated grading, and intelligent tutoring systems. Machine learning algorithms \
    can analyze student performance data to identify learning gaps and recommend targeted \
    interventions. Natural language processing enables automated essay scoring and feedback \
    generation.";

const YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const INVALID_YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=invalid_video_id_12345";

/// Look up a suite by its configured name.
pub fn suite(name: &str) -> Result<Vec<TestCase>, SetupError> {
    match name {
        "full" => Ok(full_suite()),
        "smoke" => Ok(smoke_suite()),
        other => Err(SetupError::UnknownSuite(other.to_string())),
    }
}

/// The complete sequence, ordered fastest first.
fn full_suite() -> Vec<TestCase> {
    vec![
        api_health(),
        text_processing(),
        audio_processing(),
        youtube_processing(),
        error_handling(),
    ]
}

/// Connectivity plus one cheap summarization round trip.
fn smoke_suite() -> Vec<TestCase> {
    vec![
        api_health(),
        text_case("text_smoke", "Hello world", Duration::from_secs(30), true),
    ]
}

fn api_health() -> TestCase {
    TestCase {
        name: "api_health".to_string(),
        critical: true,
        request: RequestSpec {
            method: Method::Get,
            path: "/".to_string(),
            payload: Payload::Empty,
            timeout: Duration::from_secs(10),
        },
        expect: ExpectedShape::StatusOnly {
            statuses: vec![200],
        },
    }
}

fn text_processing() -> TestCase {
    text_case("text_processing", TEST_TEXT, Duration::from_secs(60), true)
}

fn text_case(name: &str, text: &str, timeout: Duration, critical: bool) -> TestCase {
    TestCase {
        name: name.to_string(),
        critical,
        request: RequestSpec {
            method: Method::Post,
            path: PROCESS_PATH.to_string(),
            payload: Payload::Json(json!({
                "text": text,
                "sourceType": SourceKind::Text.as_str(),
            })),
            timeout,
        },
        expect: ExpectedShape::SuccessEnvelope {
            source: SourceKind::Text,
        },
    }
}

fn audio_processing() -> TestCase {
    TestCase {
        name: "audio_processing".to_string(),
        critical: true,
        request: RequestSpec {
            method: Method::Post,
            path: PROCESS_PATH.to_string(),
            payload: Payload::Multipart(vec![
                MultipartField {
                    name: "file".to_string(),
                    value: FieldValue::File {
                        filename: "test_audio.wav".to_string(),
                        content_type: "audio/wav".to_string(),
                        bytes: silence_wav(),
                    },
                },
                MultipartField {
                    name: "sourceType".to_string(),
                    value: FieldValue::Text(SourceKind::Audio.as_str().to_string()),
                },
            ]),
            timeout: Duration::from_secs(120),
        },
        expect: ExpectedShape::SuccessEnvelope {
            source: SourceKind::Audio,
        },
    }
}

fn youtube_processing() -> TestCase {
    TestCase {
        name: "youtube_processing".to_string(),
        critical: true,
        request: RequestSpec {
            method: Method::Post,
            path: PROCESS_PATH.to_string(),
            payload: Payload::Json(json!({
                "youtubeUrl": YOUTUBE_URL,
                "sourceType": SourceKind::Youtube.as_str(),
            })),
            timeout: Duration::from_secs(300),
        },
        expect: ExpectedShape::SuccessEnvelope {
            source: SourceKind::Youtube,
        },
    }
}

/// A video id that cannot resolve. The API must reject it; a 200 here
/// fails the case. Advisory, so it never drives the exit code.
fn error_handling() -> TestCase {
    TestCase {
        name: "error_handling".to_string(),
        critical: false,
        request: RequestSpec {
            method: Method::Post,
            path: PROCESS_PATH.to_string(),
            payload: Payload::Json(json!({
                "youtubeUrl": INVALID_YOUTUBE_URL,
                "sourceType": SourceKind::Youtube.as_str(),
            })),
            timeout: Duration::from_secs(60),
        },
        expect: ExpectedShape::ErrorStatus {
            statuses: vec![400, 500],
        },
    }
}

/// One second of 16-bit mono silence at 44.1 kHz, rendered in memory.
fn silence_wav() -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("wav header");
        for _ in 0..44_100 {
            writer.write_sample(0_i16).expect("wav sample");
        }
        writer.finalize().expect("wav finalize");
    }
    cursor.into_inner()
}
