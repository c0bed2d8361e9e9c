//! Balloon Pop Maths · question generation core
//!
//! Arithmetic, algebra, time, mass, volume and geometry questions for primary
//! school grades 1-6, built from template tables with a story → standard →
//! default-question fallback, plus stored exam questions and multiple-choice
//! option generation.

pub mod batch;
pub mod config;
pub mod distractor;
pub mod domain;
pub mod exam;
pub mod geometry;
pub mod grade;
pub mod pools;
pub mod protocol;
pub mod random;
pub mod routes;
pub mod seeds;
pub mod service;
pub mod story;
pub mod telemetry;
pub mod template;
pub mod units;
pub mod util;
