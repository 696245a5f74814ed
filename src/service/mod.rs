pub mod download_clients;

pub use download_clients::DownloadClientService;
