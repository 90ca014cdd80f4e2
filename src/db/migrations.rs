//! Database schema migration management and versioning.
//!
//! Every schema change is an additive, numbered migration. Pending migrations
//! are applied in version order inside one transaction when the database is
//! opened, and each applied version is recorded in the `migrations` table.
//!
//! ## Schema history
//!
//! - **v1** `create_tasks`: the task table and its due date index
//! - **v2** `add_categories`: explicitly stored category names
//! - **v3** `add_quote_cache`: the single-row quote cache
//! - **v4** `add_task_completed_date`: nullable completion timestamp on tasks
//!
//! ## Usage
//!
//! ```rust
//! use taskmate::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 4);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::info;

/// Tracks applied migrations, one row per version.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all known migrations, kept in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all migrations in chronological order.
    ///
    /// Migrations only ever add tables or nullable columns; existing rows are
    /// never rewritten.
    fn register_migrations(&mut self) {
        // Version 1: task storage
        self.add_migration(1, "create_tasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    due_date INTEGER NOT NULL DEFAULT 0,
                    priority TEXT NOT NULL,
                    category TEXT NOT NULL,
                    is_completed BOOLEAN NOT NULL DEFAULT FALSE
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category)", [])?;
            Ok(())
        });

        // Version 2: categories that exist independently of the tasks using them
        self.add_migration(2, "add_categories", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS categories (
                    name TEXT NOT NULL PRIMARY KEY
                )",
                [],
            )?;
            Ok(())
        });

        // Version 3: last successfully fetched quote, always stored under id 1
        self.add_migration(3, "add_quote_cache", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS quotes (
                    id INTEGER NOT NULL PRIMARY KEY,
                    content TEXT NOT NULL,
                    author TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        });

        // Version 4: completion timestamp, NULL for existing rows
        self.add_migration(4, "add_task_completed_date", |tx| {
            tx.execute("ALTER TABLE tasks ADD COLUMN completed_date INTEGER", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Highest version known to this build.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every migration newer than the database's current version.
    ///
    /// All pending migrations share one transaction: either the database ends
    /// up at the latest version or it is left untouched.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));
        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        info!(version = self.latest_version(), "database schema migrated");

        Ok(())
    }

    /// Current schema version, 0 for a fresh database.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

/// Brings `conn` up to the latest schema.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
