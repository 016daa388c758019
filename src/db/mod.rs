//! Database module: models and schema for the blog tables.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, insert/update inputs, validation
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `BlogStorage`, the pool-backed store
//! - `users.rs`, `groups.rs`, `posts.rs`, `follows.rs`, `comments.rs`: per-table operations

pub mod models;
pub mod schema;
pub mod sqlite;

mod comments;
mod follows;
mod groups;
mod posts;
mod users;

pub use models::{
    Comment, Follow, Group, NewComment, NewGroup, NewPost, Post, PostImage, PostUpdate,
    TableCounts, User,
};
pub use schema::SQLITE_INIT;
pub use sqlite::{BlogStorage, SqlitePool};
