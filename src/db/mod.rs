//! Persistence layer for taskmate.
//!
//! Stores tasks, category names and the cached quote in one SQLite file.
//! Table modules are plain SQL wrappers over a borrowed connection; all
//! policy (category derivation, quote fallback) lives in the repository.
//!
//! ## Usage
//!
//! ```rust
//! use taskmate::db::{categories::Categories, db::Db, tasks::Tasks};
//! use taskmate::libs::task::{Priority, Task};
//!
//! let db = Db::in_memory()?;
//! db.write(|tx| {
//!     Tasks::new(tx).insert(&Task::new("Call mum", "", 0, Priority::Medium, "Home"))?;
//!     Categories::new(tx).insert("Home")
//! })?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Shared connection handle, transactional writes and change notification.
pub mod db;

/// Live, push-based task queries.
pub mod live;

/// Versioned, additive schema migrations.
pub mod migrations;

/// Explicitly stored category names.
pub mod categories;

/// Single-row cache of the last fetched quote.
pub mod quotes;

/// Task CRUD and filtered queries.
pub mod tasks;
