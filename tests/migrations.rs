#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use todolist::db::db::Db;
    use todolist::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl MigrationTestContext {
        fn path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("todo_database.db")
        }
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.path()).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(ctx.path()).unwrap();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
            [],
        )
        .unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.path()).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_todo_table", "add_priority_index"]);
        assert_eq!(history[0].0, 1);
        assert!(manager.is_migration_applied(&conn, 2).unwrap());
        assert!(!manager.is_migration_applied(&conn, 99).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.path()).unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_has_task_table_and_index(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.path()).unwrap();

        let table: i32 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'todo_table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let index: i32 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_todo_priority'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table, 1);
        assert_eq!(index, 1);
    }

    #[cfg(debug_assertions)]
    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_forgets_newer_versions(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.path()).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        manager.rollback_to(&mut conn, 1).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(needs_migration(&conn).unwrap());

        // Version 2 is idempotent, so it can be re-applied.
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 2);
    }
}
