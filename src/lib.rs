pub mod config;
pub mod db;
pub mod error;
pub mod service;
pub mod types;

pub use db::{ClientStore, UpsertOutcome};
pub use error::ClientStoreError;
pub use service::DownloadClientService;
pub use types::{BasicAuth, DownloadClient, DownloadClientSettings, DownloadClientType};
