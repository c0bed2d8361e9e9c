//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to the question service. We reply with a single JSON message per request.

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use super::http::questions_for;
use super::AppState;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
  info!(target: "balloon_pop", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: AppState) {
  info!(target: "balloon_pop", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let out = reply_to(&txt, &state);
        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "balloon_pop", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "balloon_pop", "WebSocket disconnected");
}

/// Parse, dispatch, serialize response.
fn reply_to(txt: &str, state: &AppState) -> String {
  let reply_msg = match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "balloon_pop", "WS received: {:?}", &incoming);
      handle_client_ws(incoming, state)
    }
    Err(e) => {
      debug!(target: "balloon_pop", raw = %trunc_for_log(txt, 200), "WS invalid frame");
      ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) }
    }
  };

  serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[instrument(level = "info", skip(state))]
fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Questions(body) => {
      let mode = body.mode.clone();
      let out = questions_for(state, body);
      info!(target: "questions", %mode, origin = out.origin.label(), served = out.questions.len(), "WS questions served");
      ServerWsMessage::Questions(out)
    }

    ClientWsMessage::Answers(body) => {
      let mut rng = rand::thread_rng();
      ServerWsMessage::Answers(state.answer_array(&mut rng, &body.mode, &body.question))
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use serde_json::Value;

  use super::*;
  use crate::config::GeneratorConfig;
  use crate::service::QuestionService;

  fn state() -> AppState {
    Arc::new(QuestionService::from_config(&GeneratorConfig::default()))
  }

  fn reply(txt: &str) -> Value {
    serde_json::from_str(&reply_to(txt, &state())).expect("json reply")
  }

  #[test]
  fn ping_pong() {
    assert_eq!(reply(r#"{"type":"ping"}"#)["type"], "pong");
  }

  #[test]
  fn questions_over_ws() {
    let v = reply(r#"{"type":"questions","mode":"volume","options":["Konversi Volume"],"count":2}"#);
    assert_eq!(v["type"], "questions");
    assert_eq!(v["questions"].as_array().map(Vec::len), Some(2));
  }

  #[test]
  fn answers_over_ws() {
    let v = reply(r#"{"type":"answers","mode":"heavy","question":{"text":"1 kg = ... ons","answer":10}}"#);
    assert_eq!(v["type"], "answers");
    assert_eq!(v["correct"], "10");
    assert!(v["options"].as_array().unwrap().iter().any(|o| o == "10"));
  }

  #[test]
  fn bad_frames_get_an_error() {
    let v = reply("not json");
    assert_eq!(v["type"], "error");
    assert!(v["message"].as_str().unwrap().starts_with("Invalid JSON"));
  }
}
