use crate::error::ClientStoreError;
use crate::types::{DownloadClient, DownloadClientSettings};
use sqlx::FromRow;

/// Flat column tuple of the `client` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbDownloadClient {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub client_type: String,
    pub enabled: bool,
    pub host: String,
    pub port: i32,
    pub ssl: bool,
    pub username: String,
    pub password: String,
    pub settings: Option<String>,
}

impl DbDownloadClient {
    /// Build the column tuple for a write. Settings are encoded in full;
    /// an encoding failure surfaces before any statement can be issued.
    pub fn encode(client: &DownloadClient) -> Result<Self, ClientStoreError> {
        let settings = encode_settings(client)?;
        Ok(Self {
            id: client.id,
            name: client.name.clone(),
            client_type: client.client_type.as_str().to_string(),
            enabled: client.enabled,
            host: client.host.clone(),
            port: client.port,
            ssl: client.use_tls,
            username: client.username.clone(),
            password: client.password.clone(),
            settings: Some(settings),
        })
    }
}

impl TryFrom<DbDownloadClient> for DownloadClient {
    type Error = ClientStoreError;

    fn try_from(row: DbDownloadClient) -> Result<Self, Self::Error> {
        let settings = decode_settings(row.id, row.settings.as_deref())?;
        Ok(DownloadClient {
            id: row.id,
            name: row.name,
            client_type: row.client_type.into(),
            enabled: row.enabled,
            host: row.host,
            port: row.port,
            use_tls: row.ssl,
            username: row.username,
            password: row.password,
            settings,
        })
    }
}

pub fn encode_settings(client: &DownloadClient) -> Result<String, ClientStoreError> {
    serde_json::to_string(&client.settings).map_err(|source| ClientStoreError::SettingsEncode {
        name: client.name.clone(),
        source,
    })
}

/// Missing or empty text yields default settings without parsing.
pub fn decode_settings(
    id: i64,
    raw: Option<&str>,
) -> Result<DownloadClientSettings, ClientStoreError> {
    match raw {
        None | Some("") => Ok(DownloadClientSettings::default()),
        Some(s) => {
            serde_json::from_str(s).map_err(|source| ClientStoreError::SettingsDecode { id, source })
        }
    }
}
