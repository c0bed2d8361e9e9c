//! HTTP endpoint handlers. These are thin wrappers that forward to the question service.
//! Each handler is instrumented and logs its parameters and basic result info.

use axum::{
  extract::{rejection::JsonRejection, State},
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument, warn};

use super::AppState;
use crate::domain::Mode;
use crate::protocol::*;
use crate::service::sub_mode_keys;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_modes() -> impl IntoResponse {
  let modes = Mode::ALL
    .into_iter()
    .map(|mode| ModeOut { mode, sub_modes: sub_mode_keys(mode) })
    .collect();
  Json(ModesOut { modes })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_questions(
  State(state): State<AppState>,
  body: Result<Json<QuestionsIn>, JsonRejection>,
) -> Response {
  let Json(body) = match body {
    Ok(body) => body,
    Err(rejection) => return rejected(rejection),
  };
  let mode = body.mode.clone();
  let out = questions_for(&state, body);
  info!(target: "questions", %mode, origin = out.origin.label(), served = out.questions.len(), "HTTP questions served");
  Json(out).into_response()
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_answers(
  State(state): State<AppState>,
  body: Result<Json<AnswersIn>, JsonRejection>,
) -> Response {
  let Json(body) = match body {
    Ok(body) => body,
    Err(rejection) => return rejected(rejection),
  };
  let mut rng = rand::thread_rng();
  Json(state.answer_array(&mut rng, &body.mode, &body.question)).into_response()
}

/// Bad request bodies get the same JSON error shape as bad WS frames.
fn rejected(rejection: JsonRejection) -> Response {
  let status = rejection.status();
  let message = rejection.body_text();
  warn!(target: "balloon_pop", %status, %message, "Rejected HTTP body");
  (status, Json(ServerWsMessage::Error { message })).into_response()
}

/// Shared by the HTTP and WebSocket paths.
pub(crate) fn questions_for(state: &AppState, body: QuestionsIn) -> QuestionsOut {
  let mut rng = rand::thread_rng();
  let (questions, origin) = state.generate(&mut rng, &body.mode, &body.options, body.count, body.difficulty);
  QuestionsOut { origin, questions }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::body::{to_bytes, Body};
  use axum::http::{Request, StatusCode};
  use serde_json::{json, Value};
  use tower::ServiceExt;

  use crate::config::GeneratorConfig;
  use crate::routes::build_router;
  use crate::service::{QuestionService, MAX_QUESTIONS};

  fn app() -> axum::Router {
    build_router(Arc::new(QuestionService::from_config(&GeneratorConfig::default())))
  }

  async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let res = app().oneshot(req).await.expect("response");
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).expect("json"))
  }

  fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
      .header("content-type", "application/json")
      .body(Body::from(body.to_string()))
      .expect("request")
  }

  #[tokio::test]
  async fn health_is_ok() {
    let (status, body) = send(Request::get("/api/v1/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
  }

  #[tokio::test]
  async fn modes_list_sub_modes() {
    let (status, body) = send(Request::get("/api/v1/modes").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let modes = body["modes"].as_array().expect("modes");
    assert_eq!(modes.len(), 7);
    let exam = modes.iter().find(|m| m["mode"] == "exam").expect("exam");
    assert_eq!(exam["subModes"], json!(["Essay", "Pilihan Ganda", "Visual"]));
  }

  #[tokio::test]
  async fn questions_are_generated() {
    let req = post("/api/v1/questions", json!({ "mode": "operator", "options": ["Kali"], "count": 4 }));
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(4));
    assert!(matches!(body["origin"].as_str(), Some("story") | Some("standard")));
  }

  #[tokio::test]
  async fn empty_exam_gives_empty_list() {
    let req = post("/api/v1/questions", json!({ "mode": "exam", "options": ["Essay"], "count": 10 }));
    let (_, body) = send(req).await;
    assert_eq!(body["origin"], "exam");
    assert_eq!(body["questions"], json!([]));
  }

  #[tokio::test]
  async fn huge_count_is_capped() {
    let req = post("/api/v1/questions", json!({ "mode": "operator", "options": ["Tambah"], "count": 1u64 << 60 }));
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    let served = body["questions"].as_array().map(Vec::len).unwrap_or(0);
    assert!(served >= 1 && served <= MAX_QUESTIONS, "{served}");
  }

  #[tokio::test]
  async fn bad_bodies_get_json_errors() {
    let malformed = Request::post("/api/v1/questions")
      .header("content-type", "application/json")
      .body(Body::from("{ not json"))
      .expect("request");
    let (status, body) = send(malformed).await;
    assert!(status.is_client_error());
    assert_eq!(body["type"], "error");
    assert!(body["message"].as_str().is_some());

    let (status, body) = send(post("/api/v1/questions", json!({ "mode": "operator", "count": -3 }))).await;
    assert!(status.is_client_error());
    assert_eq!(body["type"], "error");

    let (status, body) = send(post("/api/v1/answers", json!({ "question": { "text": "1 + 1", "answer": 2 } }))).await;
    assert!(status.is_client_error());
    assert_eq!(body["type"], "error");

    let untyped = Request::post("/api/v1/answers").body(Body::from("{}")).expect("request");
    let (status, body) = send(untyped).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["type"], "error");
  }

  #[tokio::test]
  async fn exam_choices_come_back_lettered() {
    let req = post(
      "/api/v1/answers",
      json!({ "mode": "exam", "question": { "text": "5 x 6 = ...", "answer": "30", "choices": ["11", "30", "25", "35"] } }),
    );
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    let mut letters: Vec<String> = serde_json::from_value(body["options"].clone()).unwrap();
    letters.sort();
    assert_eq!(letters, vec!["A", "B", "C", "D"]);
    let correct = body["correct"].as_str().unwrap();
    let mapped = body["choiceMap"].as_array().unwrap().iter().find(|c| c["letter"] == correct).unwrap();
    assert_eq!(mapped["text"], "30");
  }
}
