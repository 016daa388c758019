use crate::db::models::{Follow, UserId};
use crate::db::sqlite::BlogStorage;
use crate::error::YatubeError;
use tracing::{debug, info};

impl BlogStorage {
    /// Record that `user_id` follows `following_id`. A repeated pair fails
    /// with a unique violation. Self-follows are not rejected here.
    pub async fn follow(
        &self,
        user_id: UserId,
        following_id: UserId,
    ) -> Result<Follow, YatubeError> {
        let follow: Follow = sqlx::query_as(
            r#"
            INSERT INTO follows (user_id, following_id)
            VALUES (?, ?)
            RETURNING id, user_id, following_id
            "#,
        )
        .bind(user_id)
        .bind(following_id)
        .fetch_one(&self.pool)
        .await?;
        info!(user_id, following_id, "follow created");
        Ok(follow)
    }

    pub async fn unfollow(
        &self,
        user_id: UserId,
        following_id: UserId,
    ) -> Result<bool, YatubeError> {
        let res = sqlx::query("DELETE FROM follows WHERE user_id = ? AND following_id = ?")
            .bind(user_id)
            .bind(following_id)
            .execute(&self.pool)
            .await?;
        let deleted = res.rows_affected() > 0;
        debug!(user_id, following_id, deleted, "unfollow");
        Ok(deleted)
    }

    pub async fn is_following(
        &self,
        user_id: UserId,
        following_id: UserId,
    ) -> Result<bool, YatubeError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = ? AND following_id = ?)",
        )
        .bind(user_id)
        .bind(following_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Edges where `user_id` is the follower.
    pub async fn following_of(&self, user_id: UserId) -> Result<Vec<Follow>, YatubeError> {
        let follows: Vec<Follow> = sqlx::query_as(
            "SELECT id, user_id, following_id FROM follows WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(follows)
    }

    /// Edges where `user_id` is the one being followed.
    pub async fn followers_of(&self, user_id: UserId) -> Result<Vec<Follow>, YatubeError> {
        let follows: Vec<Follow> = sqlx::query_as(
            "SELECT id, user_id, following_id FROM follows WHERE following_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(follows)
    }

    pub async fn list_follows(&self) -> Result<Vec<Follow>, YatubeError> {
        let follows: Vec<Follow> =
            sqlx::query_as("SELECT id, user_id, following_id FROM follows ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(follows)
    }
}
