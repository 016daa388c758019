use crate::config::Config;
use crate::db::models::TableCounts;
use crate::db::schema::SQLITE_INIT;
use crate::error::YatubeError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// Pool-backed store for users, groups, posts, follows and comments.
/// Entity operations live in the sibling `users`, `groups`, `posts`,
/// `follows` and `comments` modules.
#[derive(Clone)]
pub struct BlogStorage {
    pub(crate) pool: SqlitePool,
}

impl BlogStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` with
    /// foreign-key enforcement on every connection.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, YatubeError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        debug!(database_url, max_connections, "sqlite pool opened");
        Ok(Self::new(pool))
    }

    /// Connect using `cfg` and apply the schema.
    pub async fn open(cfg: &Config) -> Result<Self, YatubeError> {
        let storage = Self::connect(&cfg.database_url, cfg.max_connections).await?;
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), YatubeError> {
        // sqlx::query runs one statement at a time
        let mut applied = 0usize;
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
            applied += 1;
        }
        info!(statements = applied, "schema initialized");
        Ok(())
    }

    pub async fn table_counts(&self) -> Result<TableCounts, YatubeError> {
        let (users, groups, posts, follows, comments): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                r#"SELECT
                    (SELECT COUNT(*) FROM users),
                    (SELECT COUNT(*) FROM post_groups),
                    (SELECT COUNT(*) FROM posts),
                    (SELECT COUNT(*) FROM follows),
                    (SELECT COUNT(*) FROM comments)"#,
            )
            .fetch_one(&self.pool)
            .await?;
        Ok(TableCounts {
            users,
            groups,
            posts,
            follows,
            comments,
        })
    }
}
