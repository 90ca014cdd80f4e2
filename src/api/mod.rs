//! Clients for remote services.
//!
//! The only remote dependency is the quote service. Callers depend on the
//! [`QuoteSource`] trait so the repository can be exercised against stubs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::api::{QuoteClient, QuoteSource};
//! use taskmate::libs::config::QuoteApiConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = QuoteClient::new(&QuoteApiConfig::default())?;
//! let quote = client.fetch_random_quote().await?;
//! println!("{} - {}", quote.content, quote.author);
//! # Ok(())
//! # }
//! ```

use crate::libs::quote::Quote;

pub mod quotes;

pub use quotes::{QuoteClient, QuoteError};

/// Source of random quotes.
///
/// Implementations perform one request per call. They neither retry nor
/// cache; the repository decides what to do with a failure.
#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    async fn fetch_random_quote(&self) -> Result<Quote, QuoteError>;
}
