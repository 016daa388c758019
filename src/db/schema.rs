//! SQL DDL for the blog tables.
//! SQLite-first design; foreign keys must be enabled on every connection
//! for the ON DELETE policies to fire.

/// SQLite schema with:
/// - `users.username` UNIQUE
/// - `post_groups.slug` UNIQUE, the group's stable identifier
/// - `posts.author_id` CASCADE, `posts.group_id` SET NULL
/// - `follows(user_id, following_id)` UNIQUE as `unique_follow`, both sides CASCADE
/// - `comments.author_id` and `comments.post_id` CASCADE, `created` indexed
///
/// Timestamps are written once on insert and never updated.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    date_joined TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS post_groups (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    pub_date TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    group_id INTEGER NULL REFERENCES post_groups(id) ON DELETE SET NULL,
    image TEXT NULL -- path under the posts/ upload prefix
);

CREATE INDEX IF NOT EXISTS idx_posts_author_id ON posts(author_id);
CREATE INDEX IF NOT EXISTS idx_posts_group_id ON posts(group_id);

CREATE TABLE IF NOT EXISTS follows (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    following_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    CONSTRAINT unique_follow UNIQUE (user_id, following_id)
);

CREATE INDEX IF NOT EXISTS idx_follows_following_id ON follows(following_id);

CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    author_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    post_id INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    text TEXT NOT NULL,
    created TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_comments_created ON comments(created);
CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id);
CREATE INDEX IF NOT EXISTS idx_comments_author_id ON comments(author_id)
"#;

/// Tables in dependency order, used for row summaries.
pub const TABLES: [&str; 5] = ["users", "post_groups", "posts", "follows", "comments"];
