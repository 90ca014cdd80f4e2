//! Core library modules for taskmate.
//!
//! ## Features
//!
//! - **Domain Model**: Tasks, priorities, filters and quotes
//! - **Repository**: Category derivation and quote fallback policy
//! - **Use Cases**: One wrapper per user action, bundled for front ends
//! - **Infrastructure**: Configuration, data directory, messages, console views
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::libs::{app::App, config::Config};
//! use taskmate::libs::task::{Priority, Task};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let app = App::new(&Config::read()?)?;
//! let task = Task::new("Book dentist", "", 0, Priority::High, "Health");
//! app.use_cases.add_task.execute(&task).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod quote;
pub mod repository;
pub mod task;
pub mod use_cases;
pub mod view;
