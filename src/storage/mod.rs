//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Assessment history (save, history, latest, baseline)
//! - Assistant chat logs
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Timestamps are stored as fixed-width RFC 3339 text so that text ordering
//! matches time ordering; ties fall back to insertion order.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `progress`: Assessment history operations
//! - `chat`: Chat log operations
//! - `trait_impl`: `ProgressStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use gadget_risk::storage::{SortDirection, SqliteStorage};
//!
//! let storage = SqliteStorage::new("./data/gadget_risk.db").await?;
//! let entry = storage.save_assessment("user-1", &input, &result).await?;
//! let history = storage.get_progress_history("user-1", SortDirection::Desc).await?;
//! ```

mod chat;
mod core;
mod progress;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::{ChatMessage, ChatRole, ProgressEntry, ProgressPayload, SortDirection};
