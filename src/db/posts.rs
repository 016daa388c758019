use crate::db::models::{GroupId, NewPost, Post, PostId, PostUpdate, UserId};
use crate::db::sqlite::BlogStorage;
use crate::error::YatubeError;
use chrono::Utc;
use tracing::{debug, info};

impl BlogStorage {
    /// Insert a post stamped with the current time as its publication date.
    pub async fn create_post(&self, post: NewPost) -> Result<Post, YatubeError> {
        let created: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (text, pub_date, author_id, group_id, image)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, text, pub_date, author_id, group_id, image
            "#,
        )
        .bind(post.text)
        .bind(Utc::now())
        .bind(post.author_id)
        .bind(post.group_id)
        .bind(post.image)
        .fetch_one(&self.pool)
        .await?;
        info!(
            post_id = created.id,
            author_id = created.author_id,
            group_id = ?created.group_id,
            "post created"
        );
        Ok(created)
    }

    pub async fn get_post(&self, id: PostId) -> Result<Option<Post>, YatubeError> {
        let post: Option<Post> = sqlx::query_as(
            r#"SELECT id, text, pub_date, author_id, group_id, image
               FROM posts WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, YatubeError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"SELECT id, text, pub_date, author_id, group_id, image
               FROM posts ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    pub async fn posts_by_author(&self, author_id: UserId) -> Result<Vec<Post>, YatubeError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"SELECT id, text, pub_date, author_id, group_id, image
               FROM posts WHERE author_id = ? ORDER BY id"#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    pub async fn posts_in_group(&self, group_id: GroupId) -> Result<Vec<Post>, YatubeError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"SELECT id, text, pub_date, author_id, group_id, image
               FROM posts WHERE group_id = ? ORDER BY id"#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// Update the editable fields of a post. `pub_date` and `author_id`
    /// are left as they were written at creation.
    pub async fn update_post(&self, id: PostId, update: PostUpdate) -> Result<Post, YatubeError> {
        let updated: Option<Post> = sqlx::query_as(
            r#"
            UPDATE posts SET
                text = ?,
                group_id = ?,
                image = ?
            WHERE id = ?
            RETURNING id, text, pub_date, author_id, group_id, image
            "#,
        )
        .bind(update.text)
        .bind(update.group_id)
        .bind(update.image)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        debug!(post_id = id, found = updated.is_some(), "post update");
        updated.ok_or(YatubeError::NotFound { entity: "post", id })
    }

    /// Delete a post and, through the schema, all its comments.
    pub async fn delete_post(&self, id: PostId) -> Result<bool, YatubeError> {
        let res = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = res.rows_affected() > 0;
        if deleted {
            info!(post_id = id, "post deleted");
        }
        Ok(deleted)
    }
}
