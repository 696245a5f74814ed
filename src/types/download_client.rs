use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Identity of a row that has not been persisted yet.
pub const UNSAVED_ID: i64 = 0;

/// Kind of download client. Unknown discriminators are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DownloadClientType {
    #[default]
    Qbittorrent,
    DelugeV1,
    DelugeV2,
    Transmission,
    Radarr,
    Sonarr,
    Lidarr,
    Other(String),
}

impl DownloadClientType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Qbittorrent => "qbittorrent",
            Self::DelugeV1 => "delugev1",
            Self::DelugeV2 => "delugev2",
            Self::Transmission => "transmission",
            Self::Radarr => "radarr",
            Self::Sonarr => "sonarr",
            Self::Lidarr => "lidarr",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for DownloadClientType {
    fn from(s: &str) -> Self {
        match s {
            "qbittorrent" => Self::Qbittorrent,
            "delugev1" => Self::DelugeV1,
            "delugev2" => Self::DelugeV2,
            "transmission" => Self::Transmission,
            "radarr" => Self::Radarr,
            "sonarr" => Self::Sonarr,
            "lidarr" => Self::Lidarr,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DownloadClientType {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl fmt::Display for DownloadClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DownloadClientType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DownloadClientType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// HTTP basic credentials placed in front of a client's web UI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicAuth {
    #[serde(default, skip_serializing_if = "is_false")]
    pub auth: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Schema-flexible settings, persisted as one JSON text column.
///
/// Absent fields are omitted on write so they read back as `None`.
/// `rules` is never interpreted here; unknown keys survive a round trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DownloadClientSettings {
    #[serde(rename = "apikey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Map<String, Value>>,
}

impl DownloadClientSettings {
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.basic.is_none() && self.rules.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DownloadClient {
    /// Surrogate identity; `UNSAVED_ID` until the store assigns one.
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: DownloadClientType,
    pub enabled: bool,
    pub host: String,
    pub port: i32,
    #[serde(rename = "ssl")]
    pub use_tls: bool,
    pub username: String,
    // Plaintext; see DESIGN.md on encryption at rest.
    pub password: String,
    #[serde(default)]
    pub settings: DownloadClientSettings,
}

impl DownloadClient {
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }
}
