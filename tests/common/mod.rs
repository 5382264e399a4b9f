use consultant_agenda::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A throwaway SQLite database living in its own temp directory, migrated
/// and ready to hand out pooled connections.
pub struct TestDb {
    pool: DbPool,
    _dir: tempfile::TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("db path is not utf-8"))
            .expect("failed to build connection pool");

        {
            let mut conn = pool.get().expect("failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
