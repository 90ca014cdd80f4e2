//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as done", id),
            Message::TaskReopened(id) => format!("Task #{} reopened", id),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TasksNotFound => "No tasks match".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({})", count),
            Message::TitleRequired => "Task title must not be empty".to_string(),
            Message::InvalidDueDate(input) => format!("Invalid due date '{}', expected YYYY-MM-DD", input),
            Message::NothingToUpdate => "No changes given, task left as is".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === CATEGORY MESSAGES ===
            Message::CategoryAdded(name) => format!("Category '{}' added", name),
            Message::CategoryDeleted(name) => format!("Category '{}' deleted, tasks keep their label", name),
            Message::CategoryRenamed(old, new) => format!("Category '{}' renamed to '{}'", old, new),
            Message::CategoryRequired => "Category name must not be empty".to_string(),
            Message::CategoriesNotFound => "No categories yet".to_string(),
            Message::ConfirmDeleteCategory(name) => format!("Delete category '{}'?", name),

            // === QUOTE MESSAGES ===
            Message::QuoteFetchFailed(error) => format!("Failed to fetch a quote: {}", error),
            Message::QuoteServedFromCache => "Quote service unreachable, showing the last cached quote".to_string(),
            Message::QuoteUnavailable => "No quote available. Check your connection and run `taskmate quote` again".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigModuleQuoteApi => "Quote service".to_string(),
            Message::PromptQuoteBaseUrl => "Base URL".to_string(),
            Message::PromptQuotePath => "Random quote path".to_string(),
            Message::PromptQuoteContentField => "Response field with the quote text".to_string(),
            Message::PromptQuoteAuthorField => "Response field with the author".to_string(),
            Message::PromptQuoteTimeout => "Request timeout (seconds)".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseClosed => "Database is closed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseVersion(current, latest) => format!("Schema version {} (latest {})", current, latest),
            Message::MigrationsPending => "Pending migrations will be applied on next start".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", s)
    }
}
