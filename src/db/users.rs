use crate::db::models::{User, UserId, validate_username};
use crate::db::sqlite::BlogStorage;
use crate::error::YatubeError;
use chrono::Utc;
use tracing::info;

impl BlogStorage {
    pub async fn create_user(&self, username: &str) -> Result<User, YatubeError> {
        validate_username(username)?;
        let user: User = sqlx::query_as(
            r#"INSERT INTO users (username, date_joined) VALUES (?, ?)
               RETURNING id, username, date_joined"#,
        )
        .bind(username)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, YatubeError> {
        let user: Option<User> =
            sqlx::query_as("SELECT id, username, date_joined FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, YatubeError> {
        let user: Option<User> =
            sqlx::query_as("SELECT id, username, date_joined FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, YatubeError> {
        let users: Vec<User> =
            sqlx::query_as("SELECT id, username, date_joined FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    /// Delete a user. Their posts, comments and follow edges go with them.
    pub async fn delete_user(&self, id: UserId) -> Result<bool, YatubeError> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = res.rows_affected() > 0;
        if deleted {
            info!(user_id = id, "user deleted");
        }
        Ok(deleted)
    }
}
