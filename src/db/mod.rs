pub mod pool;

use sqlx::{PgPool, SqlitePool};

use crate::models::UserRecord;

const PG_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    time BIGINT NOT NULL DEFAULT 0,
    kills BIGINT NOT NULL DEFAULT 0,
    freezes BIGINT NOT NULL DEFAULT 0,
    hooks BIGINT NOT NULL DEFAULT 0,
    fires BIGINT NOT NULL DEFAULT 0
)";

const PG_USERNAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_users_username ON users (username)";

const SQLITE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    time INTEGER NOT NULL DEFAULT 0,
    kills INTEGER NOT NULL DEFAULT 0,
    freezes INTEGER NOT NULL DEFAULT 0,
    hooks INTEGER NOT NULL DEFAULT 0,
    fires INTEGER NOT NULL DEFAULT 0
)";

/// Storage backend for user records.
///
/// Both variants satisfy the same narrow contract (insert-unique,
/// select-by-username, update-time-by-username), so handlers are written once
/// and never know which engine is underneath. `$1`-style placeholders are
/// understood by both drivers.
#[derive(Clone)]
pub enum Store {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Store {
    /// Connect to the backend named by the database URL scheme
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        if database_url.starts_with("postgres") {
            Ok(Store::Postgres(pool::create_pg_pool(database_url).await?))
        } else {
            Ok(Store::Sqlite(pool::create_sqlite_pool(database_url).await?))
        }
    }

    /// Create the users table if it does not exist.
    ///
    /// Callers treat failure here as fatal: the process must not accept
    /// requests without a schema.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        match self {
            Store::Postgres(pool) => {
                sqlx::query(PG_SCHEMA).execute(pool).await?;
                sqlx::query(PG_USERNAME_INDEX).execute(pool).await?;
            }
            Store::Sqlite(pool) => {
                sqlx::query(SQLITE_SCHEMA).execute(pool).await?;
            }
        }

        tracing::info!("Database schema initialized");

        Ok(())
    }

    /// Insert a new user with default counters.
    ///
    /// The username's unique constraint is the only atomicity guarantee:
    /// concurrent inserts of the same name race into at most one success.
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        let sql = "INSERT INTO users (username, password) VALUES ($1, $2)";
        match self {
            Store::Postgres(pool) => {
                sqlx::query(sql)
                    .bind(username)
                    .bind(password_hash)
                    .execute(pool)
                    .await?;
            }
            Store::Sqlite(pool) => {
                sqlx::query(sql)
                    .bind(username)
                    .bind(password_hash)
                    .execute(pool)
                    .await?;
            }
        }
        Ok(())
    }

    /// Fetch a full user record by exact username match
    pub async fn user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        let sql = "SELECT id, username, password, time, kills, freezes, hooks, fires \
                   FROM users WHERE username = $1";
        match self {
            Store::Postgres(pool) => {
                sqlx::query_as(sql).bind(username).fetch_optional(pool).await
            }
            Store::Sqlite(pool) => {
                sqlx::query_as(sql).bind(username).fetch_optional(pool).await
            }
        }
    }

    /// Overwrite the playtime column for a user.
    ///
    /// Returns `false` when no row matched, without creating one.
    pub async fn set_time(&self, username: &str, time: i64) -> Result<bool, sqlx::Error> {
        let sql = "UPDATE users SET time = $1 WHERE username = $2";
        let rows_affected = match self {
            Store::Postgres(pool) => {
                sqlx::query(sql)
                    .bind(time)
                    .bind(username)
                    .execute(pool)
                    .await?
                    .rows_affected()
            }
            Store::Sqlite(pool) => {
                sqlx::query(sql)
                    .bind(time)
                    .bind(username)
                    .execute(pool)
                    .await?
                    .rows_affected()
            }
        };
        Ok(rows_affected > 0)
    }

    /// Read-only lookup of a user's playtime
    pub async fn time_for(&self, username: &str) -> Result<Option<i64>, sqlx::Error> {
        let sql = "SELECT time FROM users WHERE username = $1";
        match self {
            Store::Postgres(pool) => {
                sqlx::query_scalar(sql)
                    .bind(username)
                    .fetch_optional(pool)
                    .await
            }
            Store::Sqlite(pool) => {
                sqlx::query_scalar(sql)
                    .bind(username)
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    /// Cheap connectivity probe for the health endpoint
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let sql = "SELECT 1";
        match self {
            Store::Postgres(pool) => {
                sqlx::query(sql).execute(pool).await?;
            }
            Store::Sqlite(pool) => {
                sqlx::query(sql).execute(pool).await?;
            }
        }
        Ok(())
    }
}

/// Whether a storage error is the unique-constraint rejection of a
/// duplicate username (logged differently from genuine faults)
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
