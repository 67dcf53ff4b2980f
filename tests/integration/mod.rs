//! Integration tests for the gadget risk crate.
//!
//! These tests verify end-to-end workflows including:
//! - Scoring with and without AI enrichment
//! - Progress history on a file-backed database
//! - The command runner and health assistant
//! - Error recovery paths

mod error_recovery;
mod history_workflow;
mod predict_workflow;
