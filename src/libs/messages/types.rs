/// Every user-facing text of the application.
///
/// Variants carry the values interpolated into the text; the wording itself
/// lives in the `Display` implementation.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskNotFound(i64),
    TasksNotFound,
    TasksHeader(usize),
    TitleRequired,
    InvalidDueDate(String),
    NothingToUpdate,
    ConfirmDeleteTask(String),

    // === CATEGORY MESSAGES ===
    CategoryAdded(String),
    CategoryDeleted(String),
    CategoryRenamed(String, String),
    CategoryRequired,
    CategoriesNotFound,
    ConfirmDeleteCategory(String),

    // === QUOTE MESSAGES ===
    QuoteFetchFailed(String),
    QuoteServedFromCache,
    QuoteUnavailable,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigModuleQuoteApi,
    PromptQuoteBaseUrl,
    PromptQuotePath,
    PromptQuoteContentField,
    PromptQuoteAuthorField,
    PromptQuoteTimeout,

    // === DATABASE MESSAGES ===
    DatabaseClosed,
    DatabaseUpToDate,
    DatabaseVersion(u32, u32),
    MigrationsPending,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === GENERIC ===
    OperationCancelled,
}
