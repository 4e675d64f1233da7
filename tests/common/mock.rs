// In-process stand-in for the summarization API
//
// Degraded behavior is keyed off trigger substrings in the submitted
// text, so each test picks the response shape it wants to probe:
//   "fail:server"  -> 500 with an error body
//   "plain:body"   -> 200 with a non-JSON body
//   "drop:fields"  -> 200 envelope missing transcript and summaries
//   "drop:bullets" -> 200 envelope with an empty bulletPoints
//   "short:topics" -> 200 envelope with an underfilled topics

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::common::helper::full_envelope;

/// Bind the mock on an ephemeral port and serve it in the background.
/// Returns the address probes should target.
#[allow(dead_code)]
pub async fn spawn() -> SocketAddr {
    let app = Router::new()
        .route("/", get(root))
        .route("/api/process", post(process));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock listener");
    let addr = listener.local_addr().expect("Failed to read mock address");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("Mock server error: {}", e);
        }
    });

    addr
}

/// A port with nothing listening behind it.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read throwaway address");
    drop(listener);
    format!("http://{}", addr)
}

async fn root() -> &'static str {
    "NoteForge AI"
}

async fn process(headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        return audio_response(body.len());
    }

    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid JSON body" })))
                .into_response();
        }
    };

    match value.get("sourceType").and_then(Value::as_str) {
        Some("text") => text_response(&value),
        Some("youtube") => youtube_response(&value),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unknown source type" })),
        )
            .into_response(),
    }
}

fn text_response(value: &Value) -> Response {
    let text = value.get("text").and_then(Value::as_str).unwrap_or("");

    if text.contains("fail:server") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Summarization failed" })),
        )
            .into_response();
    }
    if text.contains("plain:body") {
        return (StatusCode::OK, "OK").into_response();
    }
    if text.contains("drop:fields") {
        return Json(json!({
            "success": true,
            "data": {
                "title": "Generated Notes",
                "sourceType": "text",
            }
        }))
        .into_response();
    }

    let mut envelope = full_envelope("text", text);
    if text.contains("drop:bullets") {
        envelope.data.summaries.bullet_points = String::new();
    }
    if text.contains("short:topics") {
        envelope.data.summaries.topics = "brief".to_string();
    }
    Json(envelope).into_response()
}

fn youtube_response(value: &Value) -> Response {
    let url = value.get("youtubeUrl").and_then(Value::as_str).unwrap_or("");

    if url.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "youtubeUrl is required" })),
        )
            .into_response();
    }
    if url.contains("invalid") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to extract video metadata" })),
        )
            .into_response();
    }

    let mut envelope = full_envelope("youtube", "Never gonna give you up, never gonna let you down");
    envelope.data.youtube_url = Some(url.to_string());
    envelope.data.video_id = url.split("v=").nth(1).map(|id| id.to_string());
    Json(envelope).into_response()
}

fn audio_response(received_bytes: usize) -> Response {
    let transcript = format!("Transcribed {} bytes of uploaded audio", received_bytes);
    Json(full_envelope("audio", &transcript)).into_response()
}
