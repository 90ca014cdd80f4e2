//! # Taskmate - local task management
//!
//! A library and command-line utility for organizing personal tasks in an
//! embedded SQLite database, with a motivational quote fetched from a remote
//! service and cached for offline use.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Categories**: Free-form category labels, listable and renamable
//! - **Filtering**: Live task lists by category, priority and completion status
//! - **Daily Quote**: Remote fetch with fallback to the last cached quote
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
