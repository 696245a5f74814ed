pub mod download_client;

pub use download_client::{
    BasicAuth, DownloadClient, DownloadClientSettings, DownloadClientType, UNSAVED_ID,
};
