//! Gadget Addiction Risk
//!
//! Scores a self-reported digital-habit questionnaire for addiction risk,
//! optionally enriches the score with an LLM-written analysis, and keeps a
//! per-user history of assessments.
//!
//! # Features
//!
//! - Deterministic weighted scorer with rule-based overrides
//! - Screen-time anomaly flag from a fixed population z-score
//! - Optional Anthropic-generated analysis, never blocking the score
//! - `SQLite` progress history (latest, baseline, full timeline)
//! - Conversational health assistant with persisted chat sessions
//!
//! # Quick Start
//!
//! ```bash
//! echo '{"age": 25, ...}' | gadget-risk assess --user alice
//! ANTHROPIC_API_KEY=sk-ant-xxx gadget-risk assess --user alice --input answers.json
//! ```
//!
//! # Architecture
//!
//! ```text
//! AssessmentInput ──▶ scoring ──▶ PredictionResult ──▶ storage (SQLite)
//!                                       ▲
//!                      enrichment ──────┘
//!                          │
//!                          ▼
//!                    Anthropic API
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod anthropic;
pub mod assessment;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod predictor;
pub mod scoring;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod test_utils;
