//! Task table operations.
//!
//! Thin SQL layer over the `tasks` table. Works on any borrowed connection,
//! including an open transaction, so the repository can compose several
//! statements into one atomic write.
//!
//! ## Usage
//!
//! ```rust
//! use taskmate::db::{db::Db, tasks::Tasks};
//! use taskmate::libs::task::{Priority, Task, TaskFilter};
//!
//! let db = Db::in_memory()?;
//! let id = db.write(|tx| Tasks::new(tx).insert(&Task::new("Report", "", 0, Priority::High, "Work")))?;
//! let all = db.read(|conn| Tasks::new(conn).fetch(&TaskFilter::All))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::task::{Task, TaskFilter};
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::debug;

/// Insert a task, replacing any row with the same id.
///
/// A NULL id lets SQLite assign the next one.
const INSERT_TASK: &str = "INSERT OR REPLACE INTO tasks (id, title, description, due_date, priority, category, is_completed, completed_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, priority = ?5, category = ?6, is_completed = ?7, completed_date = ?8
    WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const UPDATE_TASKS_CATEGORY: &str = "UPDATE tasks SET category = ?2 WHERE category = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, priority, category, is_completed, completed_date FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_DUE_DATE: &str = "ORDER BY due_date ASC, id ASC";
const SELECT_DISTINCT_CATEGORIES: &str = "SELECT DISTINCT category FROM tasks";

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    /// Inserts or replaces `task` and returns its row id.
    pub fn insert(&self, task: &Task) -> Result<i64> {
        let id = task.is_persisted().then_some(task.id);
        self.conn.execute(
            INSERT_TASK,
            params![
                id,
                task.title,
                task.description,
                task.due_date,
                task.priority,
                task.category,
                task.is_completed,
                task.completed_date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "task stored");

        Ok(id)
    }

    /// Replaces the stored row with the same id. Returns 0 when there is none.
    pub fn update(&self, task: &Task) -> Result<usize> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.due_date,
                task.priority,
                task.category,
                task.is_completed,
                task.completed_date
            ],
        )?;

        Ok(affected)
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    /// Moves every task labelled `old` to `new`.
    pub fn update_category(&self, old: &str, new: &str) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_TASKS_CATEGORY, params![old, new])?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let sql = format!("{} {}", SELECT_TASKS, WHERE_ID);
        Ok(self.conn.query_row(&sql, params![id], task_from_row).optional()?)
    }

    pub fn fetch(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let query = filter.to_query();
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            conditions.push("category = ?");
            values.push(Value::Text(category));
        }
        if let Some(priority) = query.priority {
            conditions.push("priority = ?");
            values.push(Value::Text(priority.as_str().to_string()));
        }
        if let Some(completed) = query.completed {
            conditions.push("is_completed = ?");
            values.push(Value::Integer(completed as i64));
        }

        let sql = match conditions.is_empty() {
            true => format!("{} {}", SELECT_TASKS, ORDER_BY_DUE_DATE),
            false => format!("{} WHERE {} {}", SELECT_TASKS, conditions.join(" AND "), ORDER_BY_DUE_DATE),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), task_from_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Category labels currently used by at least one task, unordered.
    pub fn distinct_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_DISTINCT_CATEGORIES)?;
        let categories = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;

        Ok(categories)
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        priority: row.get(4)?,
        category: row.get(5)?,
        is_completed: row.get(6)?,
        completed_date: row.get(7)?,
    })
}
