//! Task domain model and query filters.
//!
//! A [`Task`] is a single user work item. Tasks carry a free-form category
//! label which is deliberately not a foreign key: the category list shown to
//! users is derived from both the labels in use and the explicitly stored
//! category records.
//!
//! ## Usage
//!
//! ```rust
//! use taskmate::libs::task::{Priority, Task, TaskFilter};
//!
//! let task = Task::new("Water plants", "Balcony first", 1_700_000_000_000, Priority::Low, "Home");
//! assert_eq!(task.id, 0);
//! let filter = TaskFilter::Category("Home".to_string());
//! ```

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Importance level of a task.
///
/// Persisted as the upper-case text `LOW`, `MEDIUM` or `HIGH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown priority '{0}', expected one of: low, medium, high")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePriorityError(s.to_string()))
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A user work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Row id assigned on insert, `0` until the task has been persisted.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Milliseconds since the Unix epoch, `0` when unset.
    pub due_date: i64,
    pub priority: Priority,
    pub category: String,
    pub is_completed: bool,
    /// Milliseconds since the Unix epoch at which the task was marked done.
    pub completed_date: Option<i64>,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: i64, priority: Priority, category: &str) -> Self {
        Task {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            category: category.to_string(),
            is_completed: false,
            completed_date: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Marks the task done at `at` (milliseconds).
    pub fn complete(&mut self, at: i64) {
        self.is_completed = true;
        self.completed_date = Some(at);
    }

    pub fn reopen(&mut self) {
        self.is_completed = false;
        self.completed_date = None;
    }
}

/// Conjunction of optional task predicates.
///
/// Every `None` field matches all tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TaskQuery {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.priority.is_none() && self.completed.is_none()
    }
}

/// Selects which tasks a query returns. Results are always ordered by due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Category(String),
    Priority(Priority),
    Status(bool),
    Matching(TaskQuery),
    /// High priority tasks that are not completed yet.
    HighPriorityPending,
}

impl TaskFilter {
    pub fn to_query(&self) -> TaskQuery {
        match self {
            TaskFilter::All => TaskQuery::default(),
            TaskFilter::Category(category) => TaskQuery {
                category: Some(category.clone()),
                ..TaskQuery::default()
            },
            TaskFilter::Priority(priority) => TaskQuery {
                priority: Some(*priority),
                ..TaskQuery::default()
            },
            TaskFilter::Status(completed) => TaskQuery {
                completed: Some(*completed),
                ..TaskQuery::default()
            },
            TaskFilter::Matching(query) => query.clone(),
            TaskFilter::HighPriorityPending => TaskQuery {
                category: None,
                priority: Some(Priority::High),
                completed: Some(false),
            },
        }
    }
}
