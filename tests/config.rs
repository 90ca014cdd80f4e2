#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskmate::libs::config::{Config, QuoteApiConfig, CONFIG_FILE_NAME};
    use taskmate::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.quote_api.base_url, "https://quotable-proxy.onrender.com/");
        assert_eq!(config.quote_api.path, "random");
        assert_eq!(config.quote_api.content_field, "content");
        assert_eq!(config.quote_api.author_field, "author");
        assert_eq!(config.quote_api.timeout_secs, 30);
        assert!(config.database_path.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            quote_api: QuoteApiConfig {
                base_url: "https://zenquotes.io/".to_string(),
                path: "api/random".to_string(),
                content_field: "q".to_string(),
                author_field: "a".to_string(),
                timeout_secs: 10,
            },
            database_path: Some(ctx.temp_dir.path().join("custom.db")),
        };

        config.save_to(&ctx.config_path()).unwrap();
        let loaded = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path().unwrap(), ctx.temp_dir.path().join("custom.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{"quote_api": {"path": "qod"}}"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(config.quote_api.path, "qod");
        assert_eq!(config.quote_api.base_url, QuoteApiConfig::default().base_url);
        assert_eq!(config.quote_api.timeout_secs, 30);
        assert!(config.database_path.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_directories(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::with_base_path(ctx.temp_dir.path().join("nested"));

        let path = storage.get_path("taskmate.db").unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert!(path.ends_with("taskmate.db"));
    }
}
