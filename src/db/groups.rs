use crate::db::models::{Group, GroupId, NewGroup};
use crate::db::sqlite::BlogStorage;
use crate::error::YatubeError;
use tracing::info;

impl BlogStorage {
    /// Insert a group. Fails with a unique violation if the slug is taken.
    pub async fn create_group(&self, group: NewGroup) -> Result<Group, YatubeError> {
        group.validate()?;
        let created: Group = sqlx::query_as(
            r#"
            INSERT INTO post_groups (title, slug, description)
            VALUES (?, ?, ?)
            RETURNING id, title, slug, description
            "#,
        )
        .bind(group.title)
        .bind(group.slug)
        .bind(group.description)
        .fetch_one(&self.pool)
        .await?;
        info!(group_id = created.id, slug = %created.slug, "group created");
        Ok(created)
    }

    pub async fn get_group(&self, id: GroupId) -> Result<Option<Group>, YatubeError> {
        let group: Option<Group> =
            sqlx::query_as("SELECT id, title, slug, description FROM post_groups WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(group)
    }

    pub async fn get_group_by_slug(&self, slug: &str) -> Result<Option<Group>, YatubeError> {
        let group: Option<Group> =
            sqlx::query_as("SELECT id, title, slug, description FROM post_groups WHERE slug = ?")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;
        Ok(group)
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, YatubeError> {
        let groups: Vec<Group> =
            sqlx::query_as("SELECT id, title, slug, description FROM post_groups ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(groups)
    }

    /// Replace all group fields by id.
    pub async fn update_group(&self, id: GroupId, group: NewGroup) -> Result<Group, YatubeError> {
        group.validate()?;
        let updated: Option<Group> = sqlx::query_as(
            r#"
            UPDATE post_groups SET
                title = ?,
                slug = ?,
                description = ?
            WHERE id = ?
            RETURNING id, title, slug, description
            "#,
        )
        .bind(group.title)
        .bind(group.slug)
        .bind(group.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or(YatubeError::NotFound { entity: "group", id })
    }

    /// Delete a group. Its posts stay, with their group cleared.
    pub async fn delete_group(&self, id: GroupId) -> Result<bool, YatubeError> {
        let res = sqlx::query("DELETE FROM post_groups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = res.rows_affected() > 0;
        if deleted {
            info!(group_id = id, "group deleted");
        }
        Ok(deleted)
    }
}
