use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::YatubeError;

/// Upload prefix for post images, relative to the media root.
pub const POST_IMAGE_DIR: &str = "posts/";

/// Process configuration. Every field can be overridden with a
/// `YATUBE_`-prefixed environment variable, e.g. `YATUBE_DATABASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://yatube.sqlite".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("YATUBE_"))
    }

    pub fn load() -> Result<Self, YatubeError> {
        Self::figment()
            .extract()
            .map_err(|e| YatubeError::Config(e.to_string()))
    }
}
