//! Balloon Pop Maths · question server
//!
//! - Axum HTTP + WebSocket API over the question service
//! - Static game UI fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT             : u16 (default 3000)
//!   GAME_CONFIG_PATH : path to TOML config (difficulty, story flag, exam bank)
//!   DIFFICULTY       : "easy" | "medium" | "hard", overrides the config
//!   STORY_MODE       : "0" / "false" / "off" disables story questions
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use balloon_pop_maths::routes::build_router;
use balloon_pop_maths::service::QuestionService;
use balloon_pop_maths::telemetry;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared question service (config, exam bank, story generator).
  let state = Arc::new(QuestionService::from_env());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state);

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "balloon_pop", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
