use anyhow::Result;
use rusqlite::{params, Connection};

/// Register a name; an existing record is left untouched.
const INSERT_CATEGORY: &str = "INSERT OR IGNORE INTO categories (name) VALUES (?1)";
const DELETE_CATEGORY_BY_NAME: &str = "DELETE FROM categories WHERE name = ?1";
const SELECT_ALL_CATEGORIES: &str = "SELECT name FROM categories ORDER BY name ASC";

/// Operations on the explicitly stored category names.
pub struct Categories<'a> {
    conn: &'a Connection,
}

impl<'a> Categories<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Categories { conn }
    }

    /// Idempotent register
    pub fn insert(&self, name: &str) -> Result<()> {
        self.conn.execute(INSERT_CATEGORY, params![name])?;
        Ok(())
    }

    /// Removes the record only. Tasks keep their label.
    pub fn delete_by_name(&self, name: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_CATEGORY_BY_NAME, params![name])?)
    }

    pub fn list(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CATEGORIES)?;
        let names = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;

        Ok(names)
    }
}
