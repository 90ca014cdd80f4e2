//! Composition root.
//!
//! Builds the store, quote client, repository and use cases exactly once and
//! hands them out by reference. There is no global state; whoever owns the
//! [`App`] owns the whole object graph.

use super::config::Config;
use super::repository::TaskRepository;
use super::use_cases::TaskUseCases;
use crate::api::{QuoteClient, QuoteSource};
use crate::db::db::Db;
use anyhow::Result;
use std::sync::Arc;

pub struct App<Q: QuoteSource = QuoteClient> {
    pub db: Db,
    pub use_cases: TaskUseCases<Q>,
}

impl App<QuoteClient> {
    /// Opens the configured database and quote endpoint.
    pub fn new(config: &Config) -> Result<Self> {
        let db = Db::open(config.database_path()?)?;
        let quotes = QuoteClient::new(&config.quote_api)?;

        Ok(Self::assemble(db, quotes))
    }
}

impl<Q: QuoteSource> App<Q> {
    /// Wires an application around an already opened database and quote source.
    pub fn assemble(db: Db, quotes: Q) -> Self {
        let repository = Arc::new(TaskRepository::new(db.clone(), quotes));

        Self {
            db,
            use_cases: TaskUseCases::new(repository),
        }
    }
}
