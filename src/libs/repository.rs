//! Task repository: the single domain-facing entry point to stored data.
//!
//! The repository mediates between the SQLite store and the remote quote
//! source and owns the two pieces of policy in the data layer:
//!
//! - **Category derivation**: the category list is the sorted, deduplicated
//!   union of labels used by tasks and names stored explicitly. Adding or
//!   updating a task registers its label; deleting a category record never
//!   touches tasks.
//! - **Quote fallback**: a fresh quote is cached on success; on failure the
//!   cached quote is served instead, and the fetch error only surfaces when
//!   nothing was ever cached.
//!
//! Composite writes (`add_task`, `update_task`, `update_category`) each run in
//! one transaction, so a failure part-way leaves the database unchanged.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::api::QuoteClient;
//! use taskmate::db::db::Db;
//! use taskmate::libs::config::QuoteApiConfig;
//! use taskmate::libs::repository::TaskRepository;
//! use taskmate::libs::task::{Priority, Task};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let repository = TaskRepository::new(Db::new()?, QuoteClient::new(&QuoteApiConfig::default())?);
//! let id = repository.add_task(&Task::new("Stretch", "", 0, Priority::Low, "Health")).await?;
//! let categories = repository.get_all_categories().await?;
//! let quote = repository.get_random_quote().await?;
//! # Ok(())
//! # }
//! ```

use crate::api::QuoteSource;
use crate::db::categories::Categories;
use crate::db::db::Db;
use crate::db::live::LiveQuery;
use crate::db::quotes::Quotes;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::quote::Quote;
use crate::libs::task::{Priority, Task, TaskFilter, TaskQuery};
use crate::msg_debug;
use anyhow::Result;
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub struct TaskRepository<Q: QuoteSource> {
    db: Db,
    quotes: Q,
}

impl<Q: QuoteSource> TaskRepository<Q> {
    pub fn new(db: Db, quotes: Q) -> Self {
        Self { db, quotes }
    }

    pub fn quotes(&self) -> &Q {
        &self.quotes
    }

    /// Stores `task` (replacing a row with the same id) and registers its category.
    ///
    /// Returns the row id, newly assigned when `task.id` is 0.
    pub async fn add_task(&self, task: &Task) -> Result<i64> {
        let id = self.db.write(|tx| {
            let id = Tasks::new(tx).insert(task)?;
            Categories::new(tx).insert(&task.category)?;
            Ok(id)
        })?;
        debug!(id, category = %task.category, "task added");

        Ok(id)
    }

    /// Replaces the stored task with the same id and registers its category.
    ///
    /// Updating an unknown id changes nothing except the category registration.
    pub async fn update_task(&self, task: &Task) -> Result<()> {
        let affected = self.db.write(|tx| {
            let affected = Tasks::new(tx).update(task)?;
            Categories::new(tx).insert(&task.category)?;
            Ok(affected)
        })?;
        debug!(id = task.id, affected, "task updated");

        Ok(())
    }

    /// Deletes the task with `task.id`. Category records are not touched.
    pub async fn delete_task(&self, task: &Task) -> Result<()> {
        let affected = self.db.write(|tx| Tasks::new(tx).delete(task.id))?;
        debug!(id = task.id, affected, "task deleted");

        Ok(())
    }

    pub fn get_all_tasks(&self) -> LiveQuery {
        self.db.subscribe(TaskFilter::All)
    }

    pub async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.db.read(|conn| Tasks::new(conn).get_by_id(id))
    }

    /// Every known category: labels in use plus stored names, deduplicated
    /// by exact string equality and sorted ascending.
    pub async fn get_all_categories(&self) -> Result<Vec<String>> {
        let (in_use, stored) = self.db.read(|conn| Ok((Tasks::new(conn).distinct_categories()?, Categories::new(conn).list()?)))?;

        Ok(merge_categories(in_use, stored))
    }

    pub fn get_tasks_by_category(&self, category: &str) -> LiveQuery {
        self.db.subscribe(TaskFilter::Category(category.to_string()))
    }

    pub fn get_tasks_by_priority(&self, priority: Priority) -> LiveQuery {
        self.db.subscribe(TaskFilter::Priority(priority))
    }

    pub fn get_tasks_by_status(&self, completed: bool) -> LiveQuery {
        self.db.subscribe(TaskFilter::Status(completed))
    }

    /// Tasks matching all the given criteria at once.
    pub fn get_tasks_matching(&self, query: TaskQuery) -> LiveQuery {
        self.db.subscribe(TaskFilter::Matching(query))
    }

    pub fn get_high_priority_pending(&self) -> LiveQuery {
        self.db.subscribe(TaskFilter::HighPriorityPending)
    }

    /// Marks a task done (stamping the completion time) or reopens it.
    ///
    /// Returns the updated task, or `None` for an unknown id.
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<Option<Task>> {
        let Some(mut task) = self.get_task_by_id(id).await? else {
            return Ok(None);
        };

        match completed {
            true if !task.is_completed => task.complete(Utc::now().timestamp_millis()),
            true => {}
            false => task.reopen(),
        }
        self.update_task(&task).await?;

        Ok(Some(task))
    }

    /// Fetches a fresh quote, falling back to the cached one on failure.
    ///
    /// The cache is written only after a successful fetch and read only after
    /// a failed one. The fetch error is returned only when the cache is empty.
    pub async fn get_random_quote(&self) -> Result<Quote> {
        match self.quotes.fetch_random_quote().await {
            Ok(quote) => {
                self.db.write(|tx| Quotes::new(tx).insert_or_replace(&quote))?;
                Ok(quote)
            }
            Err(fetch_error) => match self.db.read(|conn| Quotes::new(conn).cached())? {
                Some(cached) => {
                    warn!("{}", Message::QuoteFetchFailed(fetch_error.to_string()));
                    msg_debug!(Message::QuoteServedFromCache);
                    Ok(cached)
                }
                None => Err(fetch_error.into()),
            },
        }
    }

    /// Registers a category name. Registering an existing name is not an error.
    pub async fn add_category(&self, name: &str) -> Result<()> {
        self.db.write(|tx| Categories::new(tx).insert(name))
    }

    /// Removes the stored category record only; a missing name is a no-op.
    pub async fn delete_category(&self, name: &str) -> Result<()> {
        let affected = self.db.write(|tx| Categories::new(tx).delete_by_name(name))?;
        debug!(name, affected, "category deleted");

        Ok(())
    }

    /// Renames a category: relabels its tasks, drops the old record and registers the new one.
    pub async fn update_category(&self, old: &str, new: &str) -> Result<()> {
        let moved = self.db.write(|tx| {
            let moved = Tasks::new(tx).update_category(old, new)?;
            let categories = Categories::new(tx);
            categories.delete_by_name(old)?;
            categories.insert(new)?;
            Ok(moved)
        })?;
        debug!(old, new, moved, "category renamed");

        Ok(())
    }
}

/// Union of both category sources, deduplicated and sorted ascending.
pub fn merge_categories(in_use: Vec<String>, stored: Vec<String>) -> Vec<String> {
    in_use.into_iter().chain(stored).collect::<BTreeSet<_>>().into_iter().collect()
}
