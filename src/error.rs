use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

/// Which integrity rule the store rejected a write with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    UniqueViolation,
    NotNullViolation,
    ForeignKeyViolation,
    CheckViolation,
}

#[derive(Debug, ThisError)]
pub enum YatubeError {
    #[error("Constraint violation: {kind:?} ({message})")]
    Constraint {
        kind: ConstraintViolation,
        message: String,
    },

    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),
}

impl YatubeError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        YatubeError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The violated constraint, if this error came from one.
    pub fn constraint(&self) -> Option<ConstraintViolation> {
        match self {
            YatubeError::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.constraint() == Some(ConstraintViolation::UniqueViolation)
    }
}

impl From<sqlx::Error> for YatubeError {
    fn from(e: sqlx::Error) -> Self {
        let kind = match &e {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintViolation::UniqueViolation),
                ErrorKind::NotNullViolation => Some(ConstraintViolation::NotNullViolation),
                ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::ForeignKeyViolation),
                ErrorKind::CheckViolation => Some(ConstraintViolation::CheckViolation),
                _ => None,
            },
            _ => None,
        };
        match (kind, e) {
            (Some(kind), sqlx::Error::Database(db_err)) => YatubeError::Constraint {
                kind,
                message: db_err.message().to_string(),
            },
            (_, e) => YatubeError::DatabaseError(e),
        }
    }
}
