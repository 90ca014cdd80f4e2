//! Single-slot quote cache.
//!
//! Holds at most one row, the last quote fetched successfully. Every store
//! overwrites it; an empty table means no fetch has ever succeeded.

use crate::libs::quote::Quote;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed primary key of the only cache row.
pub const CACHED_QUOTE_ID: i64 = 1;

const INSERT_OR_REPLACE_QUOTE: &str = "INSERT OR REPLACE INTO quotes (id, content, author) VALUES (?1, ?2, ?3)";
const SELECT_CACHED_QUOTE: &str = "SELECT content, author FROM quotes WHERE id = ?1";

pub struct Quotes<'a> {
    conn: &'a Connection,
}

impl<'a> Quotes<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Quotes { conn }
    }

    pub fn insert_or_replace(&self, quote: &Quote) -> Result<()> {
        self.conn.execute(INSERT_OR_REPLACE_QUOTE, params![CACHED_QUOTE_ID, quote.content, quote.author])?;
        Ok(())
    }

    pub fn cached(&self) -> Result<Option<Quote>> {
        let quote = self
            .conn
            .query_row(SELECT_CACHED_QUOTE, params![CACHED_QUOTE_ID], |row| {
                Ok(Quote {
                    content: row.get(0)?,
                    author: row.get(1)?,
                })
            })
            .optional()?;

        Ok(quote)
    }
}
