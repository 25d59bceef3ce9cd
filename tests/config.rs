#[cfg(test)]
mod tests {
    use todolist::libs::config::{Config, DatabaseConfig, ListConfig, DEFAULT_DB_FILE_NAME};
    use todolist::libs::todo::SortOrder;
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

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.db_file_name(), DEFAULT_DB_FILE_NAME);
        let list = config.list.unwrap_or_default();
        assert_eq!(list.default_order, SortOrder::All);
        assert!(list.confirm_delete_all);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_saved_config_reads_back(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            database: Some(DatabaseConfig {
                file_name: "work.db".to_string(),
            }),
            list: Some(ListConfig {
                default_order: SortOrder::High,
                confirm_delete_all: false,
            }),
        };

        config.save_to(&path).unwrap();
        let loaded = Config::read_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.db_file_name(), "work.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_keeps_other_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "list": { "default_order": "low", "confirm_delete_all": true } }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.db_file_name(), DEFAULT_DB_FILE_NAME);
        assert_eq!(config.list.unwrap().default_order, SortOrder::Low);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }
}
