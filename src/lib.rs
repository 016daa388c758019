pub mod config;
pub mod db;
pub mod error;

pub use db::BlogStorage;
pub use error::{ConstraintViolation, YatubeError};
