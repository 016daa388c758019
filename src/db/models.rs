use crate::config::POST_IMAGE_DIR;
use crate::error::YatubeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

pub type UserId = i64;
pub type GroupId = i64;
pub type PostId = i64;
pub type CommentId = i64;
pub type FollowId = i64;

pub const USERNAME_MAX_LEN: usize = 150;
pub const GROUP_TITLE_MAX_LEN: usize = 200;
pub const SLUG_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub date_joined: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// Usernames follow the usual account rules: non-empty, bounded, and
/// limited to letters, digits and `@ . + - _`.
pub fn validate_username(username: &str) -> Result<(), YatubeError> {
    if username.is_empty() {
        return Err(YatubeError::validation("username", "must not be empty"));
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(YatubeError::validation(
            "username",
            format!("must be at most {USERNAME_MAX_LEN} characters"),
        ));
    }
    if let Some(c) = username
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')))
    {
        return Err(YatubeError::validation(
            "username",
            format!("contains disallowed character {c:?}"),
        ));
    }
    Ok(())
}

/// A community posts can be filed under. `slug` is its stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Fields for creating or replacing a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewGroup {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl NewGroup {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), YatubeError> {
        if self.title.trim().is_empty() {
            return Err(YatubeError::validation("title", "must not be empty"));
        }
        if self.title.chars().count() > GROUP_TITLE_MAX_LEN {
            return Err(YatubeError::validation(
                "title",
                format!("must be at most {GROUP_TITLE_MAX_LEN} characters"),
            ));
        }
        validate_slug(&self.slug)
    }
}

/// Slugs are ASCII letters, digits, hyphens and underscores.
pub fn validate_slug(slug: &str) -> Result<(), YatubeError> {
    if slug.is_empty() {
        return Err(YatubeError::validation("slug", "must not be empty"));
    }
    if slug.len() > SLUG_MAX_LEN {
        return Err(YatubeError::validation(
            "slug",
            format!("must be at most {SLUG_MAX_LEN} characters"),
        ));
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(YatubeError::validation(
            "slug",
            "may only contain letters, numbers, underscores or hyphens",
        ));
    }
    Ok(())
}

/// Relative path of an uploaded post image, always under `posts/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct PostImage(String);

impl PostImage {
    pub fn in_upload_dir(file_name: &str) -> Result<Self, YatubeError> {
        if file_name.is_empty() {
            return Err(YatubeError::validation("image", "file name must not be empty"));
        }
        if file_name.contains(['/', '\\']) || file_name.contains("..") {
            return Err(YatubeError::validation(
                "image",
                "file name must not contain path components",
            ));
        }
        Ok(Self(format!("{POST_IMAGE_DIR}{file_name}")))
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0.strip_prefix(POST_IMAGE_DIR).unwrap_or(&self.0)
    }
}

impl fmt::Display for PostImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Post {
    pub id: PostId,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: UserId,
    pub group_id: Option<GroupId>,
    pub image: Option<PostImage>,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub text: String,
    pub author_id: UserId,
    pub group_id: Option<GroupId>,
    pub image: Option<PostImage>,
}

impl NewPost {
    pub fn new(author_id: UserId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author_id,
            group_id: None,
            image: None,
        }
    }

    pub fn in_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn with_image(mut self, image: PostImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// Editable post fields. Author and publication date are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostUpdate {
    pub text: String,
    pub group_id: Option<GroupId>,
    pub image: Option<PostImage>,
}

impl From<&Post> for PostUpdate {
    fn from(p: &Post) -> Self {
        Self {
            text: p.text.clone(),
            group_id: p.group_id,
            image: p.image.clone(),
        }
    }
}

/// `user_id` follows `following_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Follow {
    pub id: FollowId,
    pub user_id: UserId,
    pub following_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub post_id: PostId,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewComment {
    pub author_id: UserId,
    pub post_id: PostId,
    pub text: String,
}

impl NewComment {
    pub fn new(author_id: UserId, post_id: PostId, text: impl Into<String>) -> Self {
        Self {
            author_id,
            post_id,
            text: text.into(),
        }
    }
}

/// Row count per table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableCounts {
    pub users: i64,
    pub groups: i64,
    pub posts: i64,
    pub follows: i64,
    pub comments: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_letters_digits_hyphens_underscores() {
        assert!(validate_slug("rust-lang_2024").is_ok());
    }

    #[test]
    fn slug_rejects_spaces_and_unicode() {
        assert!(validate_slug("two words").is_err());
        assert!(validate_slug("café").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn slug_rejects_overlong() {
        let slug = "a".repeat(SLUG_MAX_LEN + 1);
        let err = validate_slug(&slug).unwrap_err();
        assert!(matches!(err, YatubeError::Validation { field: "slug", .. }));
        assert!(validate_slug(&"a".repeat(SLUG_MAX_LEN)).is_ok());
    }

    #[test]
    fn group_title_is_bounded() {
        let group = NewGroup::new("t".repeat(GROUP_TITLE_MAX_LEN + 1), "ok", "");
        assert!(matches!(
            group.validate(),
            Err(YatubeError::Validation { field: "title", .. })
        ));
        assert!(NewGroup::new("Cats", "cats", "").validate().is_ok());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("leo.tolstoy+1@example").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"u".repeat(USERNAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn image_path_lives_under_posts_dir() {
        let img = PostImage::in_upload_dir("cat.jpg").unwrap();
        assert_eq!(img.path(), "posts/cat.jpg");
        assert_eq!(img.file_name(), "cat.jpg");
        assert!(PostImage::in_upload_dir("../etc/passwd").is_err());
        assert!(PostImage::in_upload_dir("a/b.png").is_err());
        assert!(PostImage::in_upload_dir("").is_err());
    }

    #[test]
    fn display_uses_title_and_text() {
        let group = Group {
            id: 1,
            title: "Cats".into(),
            slug: "cats".into(),
            description: String::new(),
        };
        assert_eq!(group.to_string(), "Cats");

        let comment = Comment {
            id: 1,
            author_id: 1,
            post_id: 1,
            text: "nice".into(),
            created: Utc::now(),
        };
        assert_eq!(comment.to_string(), "nice");
    }
}
