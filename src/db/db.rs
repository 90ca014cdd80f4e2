//! Shared SQLite connection handle.
//!
//! A [`Db`] owns the single connection used by the whole process and a change
//! counter that live queries watch. Every committed write bumps the counter,
//! so subscribers re-read a fresh snapshot after each mutation.

use super::live::LiveQuery;
use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::task::TaskFilter;
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

pub const DB_FILE_NAME: &str = "taskmate.db";

pub(crate) struct Shared {
    conn: Mutex<Connection>,
    changes: watch::Sender<u64>,
}

impl Shared {
    pub(crate) fn read<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn.lock();
        f(&conn)
    }
}

/// Cloneable handle to the application database.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) the database at `path` and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Connection::open(path.as_ref())?;
        init_with_migrations(&mut conn)?;
        debug!(path = %path.as_ref().display(), "database opened");

        Ok(Self::from_connection(conn))
    }

    /// Opens a private in-memory database, fully migrated.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Self::from_connection(conn))
    }

    /// Opens a raw connection without touching the schema.
    pub fn new_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }

    fn from_connection(conn: Connection) -> Db {
        let (changes, _) = watch::channel(0);
        Db {
            shared: Arc::new(Shared {
                conn: Mutex::new(conn),
                changes,
            }),
        }
    }

    /// Runs read-only work against the connection.
    pub fn read<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        self.shared.read(f)
    }

    /// Runs `f` inside one transaction and notifies live queries after commit.
    ///
    /// If `f` fails the transaction is rolled back and nobody is notified.
    pub fn write<T>(&self, f: impl FnOnce(&Transaction) -> Result<T>) -> Result<T> {
        let value = {
            let mut conn = self.shared.conn.lock();
            let tx = conn.transaction()?;
            let value = f(&tx)?;
            tx.commit()?;
            value
        };
        self.shared.changes.send_modify(|version| *version += 1);

        Ok(value)
    }

    /// Subscribes to the tasks selected by `filter`.
    pub fn subscribe(&self, filter: TaskFilter) -> LiveQuery {
        LiveQuery::new(Arc::downgrade(&self.shared), self.shared.changes.subscribe(), filter)
    }

    /// Number of committed writes since the database was opened.
    pub fn version(&self) -> u64 {
        *self.shared.changes.borrow()
    }
}
