use crate::db::models::{Comment, CommentId, NewComment, PostId, UserId};
use crate::db::sqlite::BlogStorage;
use crate::error::YatubeError;
use chrono::Utc;
use tracing::info;

impl BlogStorage {
    pub async fn create_comment(&self, comment: NewComment) -> Result<Comment, YatubeError> {
        let created: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (author_id, post_id, text, created)
            VALUES (?, ?, ?, ?)
            RETURNING id, author_id, post_id, text, created
            "#,
        )
        .bind(comment.author_id)
        .bind(comment.post_id)
        .bind(comment.text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        info!(
            comment_id = created.id,
            post_id = created.post_id,
            author_id = created.author_id,
            "comment created"
        );
        Ok(created)
    }

    pub async fn get_comment(&self, id: CommentId) -> Result<Option<Comment>, YatubeError> {
        let comment: Option<Comment> = sqlx::query_as(
            "SELECT id, author_id, post_id, text, created FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(comment)
    }

    pub async fn comments_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, YatubeError> {
        let comments: Vec<Comment> = sqlx::query_as(
            r#"SELECT id, author_id, post_id, text, created
               FROM comments WHERE post_id = ? ORDER BY id"#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    pub async fn comments_by_author(&self, author_id: UserId) -> Result<Vec<Comment>, YatubeError> {
        let comments: Vec<Comment> = sqlx::query_as(
            r#"SELECT id, author_id, post_id, text, created
               FROM comments WHERE author_id = ? ORDER BY id"#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    /// Only the text is editable; `created` keeps its insert-time value.
    pub async fn update_comment(&self, id: CommentId, text: &str) -> Result<Comment, YatubeError> {
        let updated: Option<Comment> = sqlx::query_as(
            r#"
            UPDATE comments SET text = ?
            WHERE id = ?
            RETURNING id, author_id, post_id, text, created
            "#,
        )
        .bind(text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or(YatubeError::NotFound { entity: "comment", id })
    }

    pub async fn delete_comment(&self, id: CommentId) -> Result<bool, YatubeError> {
        let res = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = res.rows_affected() > 0;
        if deleted {
            info!(comment_id = id, "comment deleted");
        }
        Ok(deleted)
    }
}
