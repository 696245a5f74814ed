use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientStoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("could not decode settings for download client {id}: {source}")]
    SettingsDecode {
        id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode settings for download client {name:?}: {source}")]
    SettingsEncode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("download client {0} not found")]
    NotFound(i64),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ClientStoreError {
    /// True when the error means "no such row" rather than a storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for settings encode/decode failures.
    pub fn is_settings_error(&self) -> bool {
        matches!(self, Self::SettingsDecode { .. } | Self::SettingsEncode { .. })
    }
}

impl From<figment::Error> for ClientStoreError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable_from_database_errors() {
        assert!(ClientStoreError::NotFound(7).is_not_found());
        assert!(!ClientStoreError::DatabaseError(SqlxError::RowNotFound).is_not_found());
    }

    #[test]
    fn settings_errors_are_flagged() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientStoreError::SettingsDecode { id: 3, source };
        assert!(err.is_settings_error());
        assert!(err.to_string().contains("download client 3"));
    }
}
