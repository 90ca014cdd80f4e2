#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use taskmate::api::{QuoteError, QuoteSource};
    use taskmate::db::db::Db;
    use taskmate::libs::app::App;
    use taskmate::libs::quote::Quote;
    use taskmate::libs::task::{Priority, Task, TaskQuery};
    use test_context::{test_context, AsyncTestContext};

    struct FixedQuote(Option<Quote>);

    impl QuoteSource for FixedQuote {
        async fn fetch_random_quote(&self) -> Result<Quote, QuoteError> {
            self.0.clone().ok_or(QuoteError::Status(StatusCode::NOT_FOUND))
        }
    }

    struct AppTestContext {
        app: App<FixedQuote>,
    }

    impl AsyncTestContext for AppTestContext {
        async fn setup() -> Self {
            let db = Db::in_memory().unwrap();
            AppTestContext {
                app: App::assemble(db, FixedQuote(Some(Quote::new("Keep going", "Anonymous")))),
            }
        }
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_task_lifecycle(ctx: &mut AppTestContext) {
        let use_cases = &ctx.app.use_cases;

        let id = use_cases.add_task.execute(&Task::new("Pay rent", "", 10, Priority::High, "Home")).await.unwrap();
        let mut task = use_cases.get_task_by_id.execute(id).await.unwrap().unwrap();

        task.description = "Before the 5th".to_string();
        use_cases.update_task.execute(&task).await.unwrap();
        assert_eq!(use_cases.get_task_by_id.execute(id).await.unwrap().unwrap().description, "Before the 5th");

        let done = use_cases.set_task_completion.execute(id, true).await.unwrap().unwrap();
        assert!(done.is_completed);

        use_cases.delete_task.execute(&done).await.unwrap();
        assert!(use_cases.get_all_tasks.execute().snapshot().unwrap().is_empty());
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_filters(ctx: &mut AppTestContext) {
        let use_cases = &ctx.app.use_cases;
        use_cases.add_task.execute(&Task::new("Deploy", "", 2, Priority::High, "Work")).await.unwrap();
        use_cases.add_task.execute(&Task::new("Email", "", 1, Priority::Low, "Work")).await.unwrap();
        let id = use_cases.add_task.execute(&Task::new("Dishes", "", 3, Priority::High, "Home")).await.unwrap();
        use_cases.set_task_completion.execute(id, true).await.unwrap();

        let titles = |tasks: Vec<Task>| tasks.into_iter().map(|task| task.title).collect::<Vec<_>>();

        assert_eq!(titles(use_cases.filter_tasks.by_category("Work").snapshot().unwrap()), vec!["Email", "Deploy"]);
        assert_eq!(titles(use_cases.filter_tasks.by_priority(Priority::High).snapshot().unwrap()), vec!["Deploy", "Dishes"]);
        assert_eq!(titles(use_cases.filter_tasks.by_status(true).snapshot().unwrap()), vec!["Dishes"]);
        assert_eq!(titles(use_cases.filter_tasks.high_priority_pending().snapshot().unwrap()), vec!["Deploy"]);

        let query = TaskQuery {
            category: Some("Work".to_string()),
            priority: Some(Priority::Low),
            completed: Some(false),
        };
        assert_eq!(titles(use_cases.filter_tasks.matching(query).snapshot().unwrap()), vec!["Email"]);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_categories(ctx: &mut AppTestContext) {
        let use_cases = &ctx.app.use_cases;
        use_cases.add_task.execute(&Task::new("Report", "", 0, Priority::Medium, "Work")).await.unwrap();
        use_cases.add_category.execute("Gym").await.unwrap();
        use_cases.update_category.execute("Work", "Office").await.unwrap();
        use_cases.delete_category.execute("Gym").await.unwrap();

        assert_eq!(use_cases.get_categories.execute().await.unwrap(), vec!["Office"]);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_quote_and_write_notifications(ctx: &mut AppTestContext) {
        let before = ctx.app.db.version();

        let quote = ctx.app.use_cases.get_quote.execute().await.unwrap();

        assert_eq!(quote, Quote::new("Keep going", "Anonymous"));
        assert_eq!(ctx.app.db.version(), before + 1);
    }
}
