use std::env;
use std::path::Path;

use anyhow::Result;
use libsql::{Builder, Connection};

use crate::config::Config;

/// Explicit environment signal selecting the test database over the
/// development one. Set to `test` by the integration test suite.
pub const ENV_VAR: &str = "BOOKSHELF_ENV";

const SYSTEM_MIGRATIONS: &[(&str, &str)] = &[(
    "system/000_migrations_table.sql",
    include_str!("migrations/system/000_migrations_table.sql"),
)];

pub(crate) const SCHEMA_SQL: &str = include_str!("migrations/001_schema.sql");
pub(crate) const SEED_SQL: &str = include_str!("migrations/002_seed_books.sql");

const MIGRATIONS: &[(&str, &str)] = &[
    ("001_schema.sql", SCHEMA_SQL),
    ("002_seed_books.sql", SEED_SQL),
];

pub struct Database {
    // held so the underlying store outlives every handed-out handle
    _db: libsql::Database,
    conn: Connection,
}

impl Database {
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub async fn new(cfg: &Config, data_dir: &Path) -> Result<Self> {
        let name = match env::var(ENV_VAR) {
            Ok(v) if v == "test" => cfg.app.get_test_db(),
            _ => cfg.app.get_db(),
        };
        let path = data_dir.join(name);

        let db = Builder::new_local(&path).build().await?;
        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;

        migrate(&conn).await?;

        Ok(Database { _db: db, conn })
    }
}

pub async fn migrate(conn: &Connection) -> Result<()> {
    for (filename, sql) in SYSTEM_MIGRATIONS {
        run_migration(conn, filename, sql).await?;
    }

    for (filename, sql) in MIGRATIONS {
        run_migration(conn, filename, sql).await?;
    }

    Ok(())
}

async fn is_migration_applied(conn: &Connection, name: &str) -> Result<bool> {
    let query = "SELECT 1 FROM _migrations WHERE name = ?";
    match conn.query(query, libsql::params![name]).await {
        Ok(mut rows) => Ok(rows.next().await?.is_some()),
        Err(e) => {
            if e.to_string().contains("no such table") {
                Ok(false)
            } else {
                Err(e.into())
            }
        }
    }
}

async fn record_migration(conn: &Connection, name: &str) -> Result<()> {
    let query = r#"
        INSERT INTO _migrations (name, applied_at)
        VALUES (?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    "#;
    conn.execute(query, libsql::params![name]).await?;
    Ok(())
}

async fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    if is_migration_applied(conn, name).await? {
        tracing::debug!("migration {} already applied, skipping", name);
        return Ok(());
    }

    tracing::info!("applying migration: {}", name);
    conn.execute_batch(sql)
        .await
        .map_err(|e| anyhow::anyhow!("failed to execute migration {name}: {e}"))?;

    record_migration(conn, name).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let db = Builder::new_local(":memory:").build().await.unwrap();
        let conn = db.connect().unwrap();
        migrate(&conn).await.unwrap();
        migrate(&conn).await.unwrap();

        let mut rows = conn.query("SELECT COUNT(*) FROM books", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        let count: i32 = row.get(0).unwrap();
        assert_eq!(count, 3, "seed rows must not be applied twice");
    }
}
