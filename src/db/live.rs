//! Live task queries.
//!
//! A [`LiveQuery`] is a subscription to a filtered task list. The first call
//! to [`LiveQuery::next`] yields the current snapshot right away; every later
//! call waits for the next committed write and yields a complete, freshly
//! read snapshot. Notifications coalesce, so a slow consumer skips straight
//! to the latest state instead of replaying intermediate ones.
//!
//! Dropping the query is the unsubscribe.
//!
//! ```rust,no_run
//! use taskmate::db::db::Db;
//! use taskmate::libs::task::TaskFilter;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = Db::in_memory()?;
//! let mut live = db.subscribe(TaskFilter::All);
//! while let Some(snapshot) = live.next().await {
//!     println!("{} tasks", snapshot?.len());
//! }
//! # Ok(())
//! # }
//! ```

use super::db::Shared;
use super::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use std::sync::Weak;
use tokio::sync::watch;

pub struct LiveQuery {
    db: Weak<Shared>,
    changes: watch::Receiver<u64>,
    filter: TaskFilter,
    primed: bool,
}

impl LiveQuery {
    pub(crate) fn new(db: Weak<Shared>, changes: watch::Receiver<u64>, filter: TaskFilter) -> Self {
        Self {
            db,
            changes,
            filter,
            primed: false,
        }
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Reads the current result set without waiting for a change.
    pub fn snapshot(&self) -> Result<Vec<Task>> {
        let shared = self.db.upgrade().ok_or_else(|| msg_error_anyhow!(Message::DatabaseClosed))?;
        shared.read(|conn| Tasks::new(conn).fetch(&self.filter))
    }

    /// Waits for the next snapshot.
    ///
    /// Returns `None` once the database has been dropped.
    pub async fn next(&mut self) -> Option<Result<Vec<Task>>> {
        if self.primed {
            self.changes.changed().await.ok()?;
        }
        self.primed = true;
        let _ = self.changes.borrow_and_update();

        if self.db.strong_count() == 0 {
            return None;
        }
        Some(self.snapshot())
    }
}
