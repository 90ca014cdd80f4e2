#[cfg(test)]
mod tests {
    use taskmate::db::db::Db;
    use taskmate::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("migrations.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_reaches_latest_version(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();
        let latest = MigrationManager::new().latest_version();

        assert_eq!(latest, 4);
        assert_eq!(db.read(|conn| get_db_version(conn)).unwrap(), latest);
        assert!(!db.read(|conn| needs_migration(conn)).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unmigrated_database_needs_migration(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();
        assert!(manager.is_migration_applied(&conn, 1).unwrap());

        conn.execute("DELETE FROM migrations WHERE version > 2", []).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 2);
        assert!(needs_migration(&conn).unwrap());
        assert!(!manager.is_migration_applied(&conn, 3).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_history_is_ordered(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();
        let history = db.read(|conn| MigrationManager::new().get_migration_history(conn)).unwrap();

        let versions: Vec<u32> = history.iter().map(|(version, _, _)| *version).collect();
        assert_eq!(versions, vec![1, 2, 3, 4]);
        assert!(history.iter().all(|(_, name, applied_at)| !name.is_empty() && !applied_at.is_empty()));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        drop(Db::open(ctx.db_path()).unwrap());

        let mut conn = Db::new_without_migrations(ctx.db_path()).unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 4);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_has_expected_tables(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        let tables: Vec<String> = db
            .read(|conn| {
                let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('tasks', 'categories', 'quotes') ORDER BY name")?;
                let names = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;
                Ok(names)
            })
            .unwrap();
        assert_eq!(tables, vec!["categories", "quotes", "tasks"]);

        let has_completed_date: bool = db
            .read(|conn| Ok(conn.prepare("SELECT completed_date FROM tasks").is_ok()))
            .unwrap();
        assert!(has_completed_date);
    }
}
