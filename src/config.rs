//! Loading generator configuration (difficulty, story flag, exam bank) from TOML.
//!
//! Schema:
//! ```toml
//! difficulty = "medium"      # easy | medium | hard
//! story_mode = true
//!
//! [[exam.essay]]
//! question = "Ibu kota Indonesia adalah ..."
//! answer = "Jakarta"
//!
//! [[exam.pilgan]]
//! question = "5 x 6 = ..."
//! answer = "30"
//! choices = ["11", "30", "25", "35"]
//! ```
//! `DIFFICULTY` and `STORY_MODE` in the environment override the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{Answer, Difficulty};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot read {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
  #[error("invalid TOML in {}: {source}", path.display())]
  Toml { path: PathBuf, source: toml::de::Error },
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorConfig {
  #[serde(default)]
  pub difficulty: Difficulty,
  #[serde(default = "default_story_mode")]
  pub story_mode: bool,
  #[serde(default)]
  pub exam: ExamConfig,
}

fn default_story_mode() -> bool {
  true
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self { difficulty: Difficulty::default(), story_mode: true, exam: ExamConfig::default() }
  }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExamConfig {
  #[serde(default)] pub essay: Vec<StoredQuestion>,
  #[serde(default)] pub pilgan: Vec<StoredQuestion>,
  #[serde(default)] pub visual: Vec<StoredQuestion>,
}

/// Exam entry as saved by the question editor.
#[derive(Clone, Debug, Deserialize)]
pub struct StoredQuestion {
  #[serde(default)] pub id: Option<String>,
  pub question: String,
  pub answer: Answer,
  #[serde(default)] pub choices: Option<Vec<String>>,
  #[serde(default, alias = "imageData")] pub image_data: Option<String>,
}

pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig, ConfigError> {
  let raw = std::fs::read_to_string(path)
    .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
  toml::from_str(&raw).map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })
}

/// Config from GAME_CONFIG_PATH plus env overrides. Never fails: problems are
/// logged and defaults used.
pub fn load_config_from_env() -> GeneratorConfig {
  let cfg = match std::env::var("GAME_CONFIG_PATH") {
    Ok(path) => match load_config_from_path(Path::new(&path)) {
      Ok(cfg) => {
        info!(target: "balloon_pop", %path, "Loaded generator config (TOML)");
        cfg
      }
      Err(e) => {
        error!(target: "balloon_pop", %path, error = %e, "Failed to load config; using defaults");
        GeneratorConfig::default()
      }
    },
    Err(_) => GeneratorConfig::default(),
  };
  apply_overrides(
    cfg,
    std::env::var("DIFFICULTY").ok().as_deref(),
    std::env::var("STORY_MODE").ok().as_deref(),
  )
}

pub fn apply_overrides(mut cfg: GeneratorConfig, difficulty: Option<&str>, story_mode: Option<&str>) -> GeneratorConfig {
  if let Some(d) = difficulty {
    cfg.difficulty = Difficulty::parse(d);
  }
  if let Some(s) = story_mode {
    cfg.story_mode = !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no");
  }
  cfg
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  fn write_toml(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(body.as_bytes()).expect("write");
    f
  }

  #[test]
  fn parses_full_config() {
    let f = write_toml(
      r#"
difficulty = "hard"
story_mode = false

[[exam.essay]]
question = "Ibu kota Indonesia adalah ..."
answer = "Jakarta"

[[exam.pilgan]]
id = "p1"
question = "5 x 6 = ..."
answer = 30
choices = ["11", "30", "25", "35"]
"#,
    );
    let cfg = load_config_from_path(f.path()).expect("config");
    assert_eq!(cfg.difficulty, Difficulty::Hard);
    assert!(!cfg.story_mode);
    assert_eq!(cfg.exam.essay.len(), 1);
    assert_eq!(cfg.exam.pilgan[0].id.as_deref(), Some("p1"));
    assert_eq!(cfg.exam.pilgan[0].answer, Answer::Number(30.0));
    assert!(cfg.exam.visual.is_empty());
  }

  #[test]
  fn empty_file_gives_defaults() {
    let f = write_toml("");
    let cfg = load_config_from_path(f.path()).expect("config");
    assert_eq!(cfg.difficulty, Difficulty::Medium);
    assert!(cfg.story_mode);
  }

  #[test]
  fn errors_name_the_path() {
    let missing = Path::new("/definitely/not/here.toml");
    assert!(matches!(load_config_from_path(missing), Err(ConfigError::Io { .. })));

    let f = write_toml("difficulty = [");
    let err = load_config_from_path(f.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.to_string().contains(&f.path().display().to_string()));
  }

  #[test]
  fn overrides_win() {
    let cfg = apply_overrides(GeneratorConfig::default(), Some("easy"), Some("off"));
    assert_eq!(cfg.difficulty, Difficulty::Easy);
    assert!(!cfg.story_mode);

    let cfg = apply_overrides(cfg, Some("??"), Some("1"));
    assert_eq!(cfg.difficulty, Difficulty::Medium);
    assert!(cfg.story_mode);
  }
}
