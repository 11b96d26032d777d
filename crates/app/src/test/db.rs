//! Per-test PostgreSQL databases inside one shared container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

use crate::database;

const DB_USER: &str = "domestic_connect_test";
const DB_PASSWORD: &str = "domestic_connect_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Accept only the names [`TestDb::new`] generates, so they are safe to interpolate.
fn is_generated_name(name: &str) -> bool {
    name.len() <= 63
        && name.starts_with("dc_test_")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn test_host() -> String {
    std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string())
}

fn server_url(host: &str, port: u16, db_name: &str) -> String {
    format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{db_name}")
}

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name("domestic_connect_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            drop_database(&db_name).await;
        }
    });

    sender
}

async fn drop_database(db_name: &str) {
    if !is_generated_name(db_name) {
        return;
    }

    let Some(container) = POSTGRES_CONTAINER.get() else {
        return;
    };

    let Ok(port) = container.get_host_port_ipv4(5432).await else {
        return;
    };

    if let Ok(mut conn) = PgConnection::connect(&server_url(&test_host(), port, "postgres")).await
    {
        let _drop = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\""))
            .execute(&mut conn)
            .await;
        let _close = conn.close().await;
    }
}

/// An isolated, fully migrated database.
///
/// Every test gets its own database, so services commit normally and no
/// state leaks between tests. The database is dropped in the background once
/// the `TestDb` goes out of scope.
#[derive(Debug, Clone)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _sent = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        let name = format!("dc_test_{}", Uuid::now_v7().simple());

        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = test_host();

        let mut conn = PgConnection::connect(&server_url(&host, port, "postgres"))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&host, port, &name))
            .await
            .expect("Failed to create pool for test database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_accepted() {
        let name = format!("dc_test_{}", Uuid::now_v7().simple());

        assert!(is_generated_name(&name), "{name} should be accepted");
    }

    #[test]
    fn foreign_names_are_rejected() {
        for name in ["postgres", "dc_test_\"; DROP", "DC_TEST_ABC", ""] {
            assert!(!is_generated_name(name), "{name} should be rejected");
        }
    }

    #[tokio::test]
    async fn fresh_database_has_schema() {
        let test_db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('packages', 'purchases', 'contact_access', 'api_tokens')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to query schema");

        assert_eq!(tables, 4, "all tables should be migrated");
    }
}
