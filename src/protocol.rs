//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::distractor::AnswerOptions;
use crate::domain::{Difficulty, Mode, Origin, Question};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Questions(QuestionsIn),
    Answers(AnswersIn),
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Questions(QuestionsOut),
    Answers(AnswerOptions),
    Error {
        message: String,
    },
}

//
// HTTP request/response DTOs
//

fn default_count() -> usize {
    10
}

/// `options[0]` is the sub-mode, or the exam kind for `exam`.
#[derive(Debug, Deserialize)]
pub struct QuestionsIn {
    pub mode: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsOut {
    pub origin: Origin,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct AnswersIn {
    pub mode: String,
    pub question: Question,
}

#[derive(Serialize)]
pub struct ModeOut {
    pub mode: Mode,
    #[serde(rename = "subModes")]
    pub sub_modes: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct ModesOut {
    pub modes: Vec<ModeOut>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Answer;

    #[test]
    fn client_messages_are_tagged() {
        let msg: ClientWsMessage = serde_json::from_str(
            r#"{"type":"questions","mode":"operator","options":["Tambah"],"count":3}"#,
        )
        .unwrap();
        match msg {
            ClientWsMessage::Questions(q) => {
                assert_eq!(q.mode, "operator");
                assert_eq!(q.options, vec!["Tambah"]);
                assert_eq!(q.count, 3);
                assert_eq!(q.difficulty, None);
            }
            other => panic!("unexpected {other:?}"),
        }

        let msg: ClientWsMessage = serde_json::from_str(
            r#"{"type":"answers","mode":"exam","question":{"text":"Ibu kota?","answer":"Jakarta"}}"#,
        )
        .unwrap();
        match msg {
            ClientWsMessage::Answers(a) => assert_eq!(a.question.answer, Answer::Text("Jakarta".into())),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn count_defaults_to_ten() {
        let q: QuestionsIn = serde_json::from_str(r#"{"mode":"time","difficulty":"hard"}"#).unwrap();
        assert_eq!(q.count, 10);
        assert!(q.options.is_empty());
        assert_eq!(q.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn server_messages_are_tagged() {
        let out = ServerWsMessage::Questions(QuestionsOut {
            origin: Origin::HardFallback,
            questions: vec![Question::new("1 + 2 = ?", 3.0)],
        });
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["type"], "questions");
        assert_eq!(json["origin"], "hard_fallback");
        assert_eq!(json["questions"][0]["answer"], 3.0);

        let json = serde_json::to_value(ServerWsMessage::Pong).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "pong" }));
    }
}
