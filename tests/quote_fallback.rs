#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use reqwest::StatusCode;
    use taskmate::api::{QuoteError, QuoteSource};
    use taskmate::db::db::Db;
    use taskmate::db::quotes::Quotes;
    use taskmate::libs::quote::Quote;
    use taskmate::libs::repository::TaskRepository;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    /// Serves the configured quote, or fails while none is set.
    struct ScriptedQuotes {
        next: Mutex<Option<Quote>>,
    }

    impl ScriptedQuotes {
        fn offline() -> Self {
            Self { next: Mutex::new(None) }
        }

        fn serve(&self, quote: Option<Quote>) {
            *self.next.lock() = quote;
        }
    }

    impl QuoteSource for ScriptedQuotes {
        async fn fetch_random_quote(&self) -> Result<Quote, QuoteError> {
            self.next.lock().clone().ok_or(QuoteError::Status(StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    struct QuoteTestContext {
        _temp_dir: TempDir,
        db: Db,
        repository: TaskRepository<ScriptedQuotes>,
    }

    impl AsyncTestContext for QuoteTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("quotes.db")).unwrap();
            QuoteTestContext {
                _temp_dir: temp_dir,
                repository: TaskRepository::new(db.clone(), ScriptedQuotes::offline()),
                db,
            }
        }
    }

    impl QuoteTestContext {
        fn quotes(&self) -> &ScriptedQuotes {
            self.repository.quotes()
        }

        fn cached(&self) -> Option<Quote> {
            self.db.read(|conn| Quotes::new(conn).cached()).unwrap()
        }
    }

    #[test_context(QuoteTestContext)]
    #[tokio::test]
    async fn test_success_is_returned_and_cached(ctx: &mut QuoteTestContext) {
        let fresh = Quote::new("Stay hungry", "Jobs");
        ctx.quotes().serve(Some(fresh.clone()));

        let quote = ctx.repository.get_random_quote().await.unwrap();

        assert_eq!(quote, fresh);
        assert_eq!(ctx.cached(), Some(fresh));
    }

    #[test_context(QuoteTestContext)]
    #[tokio::test]
    async fn test_failure_serves_cached_quote(ctx: &mut QuoteTestContext) {
        let first = Quote::new("Well begun is half done", "Aristotle");
        ctx.quotes().serve(Some(first.clone()));
        ctx.repository.get_random_quote().await.unwrap();

        ctx.quotes().serve(None);
        let quote = ctx.repository.get_random_quote().await.unwrap();

        assert_eq!(quote, first);
        assert_eq!(ctx.cached(), Some(first));
    }

    #[test_context(QuoteTestContext)]
    #[tokio::test]
    async fn test_cache_keeps_only_latest_success(ctx: &mut QuoteTestContext) {
        ctx.quotes().serve(Some(Quote::new("One", "A")));
        ctx.repository.get_random_quote().await.unwrap();
        ctx.quotes().serve(Some(Quote::new("Two", "B")));
        ctx.repository.get_random_quote().await.unwrap();

        let rows: i64 = ctx.db.read(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?)).unwrap();
        assert_eq!(rows, 1);

        ctx.quotes().serve(None);
        assert_eq!(ctx.repository.get_random_quote().await.unwrap(), Quote::new("Two", "B"));
    }

    #[test_context(QuoteTestContext)]
    #[tokio::test]
    async fn test_failure_without_cache_surfaces_fetch_error(ctx: &mut QuoteTestContext) {
        let error = ctx.repository.get_random_quote().await.unwrap_err();

        match error.downcast_ref::<QuoteError>() {
            Some(QuoteError::Status(status)) => assert_eq!(*status, StatusCode::SERVICE_UNAVAILABLE),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(ctx.cached(), None);
    }

    #[test_context(QuoteTestContext)]
    #[tokio::test]
    async fn test_cache_write_failure_propagates(ctx: &mut QuoteTestContext) {
        let old = Quote::new("Old news", "Someone");
        ctx.quotes().serve(Some(old.clone()));
        ctx.repository.get_random_quote().await.unwrap();
        ctx.db
            .write(|tx| {
                tx.execute_batch(
                    "CREATE TRIGGER reject_quote BEFORE INSERT ON quotes
                     BEGIN SELECT RAISE(ABORT, 'quote rejected'); END;",
                )?;
                Ok(())
            })
            .unwrap();

        ctx.quotes().serve(Some(Quote::new("Fresh", "Someone else")));
        let error = ctx.repository.get_random_quote().await.unwrap_err();

        assert!(error.downcast_ref::<QuoteError>().is_none());
        assert_eq!(ctx.cached(), Some(old));
    }
}
