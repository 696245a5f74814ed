use crate::db::{ClientStore, UpsertOutcome};
use crate::error::ClientStoreError;
use crate::types::DownloadClient;
use tracing::{error, info, trace, warn};

/// Caller-side wrapper over [`ClientStore`] that logs each operation.
/// Results are forwarded unchanged.
#[derive(Clone)]
pub struct DownloadClientService {
    storage: ClientStore,
}

impl DownloadClientService {
    pub fn new(storage: ClientStore) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &ClientStore {
        &self.storage
    }

    pub async fn list(&self) -> Result<Vec<DownloadClient>, ClientStoreError> {
        self.storage
            .list()
            .await
            .inspect_err(|e| error!(error = %e, "could not list download clients"))
    }

    pub async fn list_enabled(&self) -> Result<Vec<DownloadClient>, ClientStoreError> {
        let clients = self.list().await?;
        Ok(clients.into_iter().filter(|c| c.enabled).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<DownloadClient, ClientStoreError> {
        self.storage.find_by_id(id).await.inspect_err(|e| {
            if e.is_not_found() {
                warn!(id, "download client not found");
            } else {
                error!(id, error = %e, "could not find download client");
            }
        })
    }

    pub async fn store(&self, client: DownloadClient) -> Result<DownloadClient, ClientStoreError> {
        let name = client.name.clone();
        let outcome = self
            .storage
            .upsert(client)
            .await
            .inspect_err(|e| error!(name = %name, error = %e, "could not store download client"))?;

        match &outcome {
            UpsertOutcome::Inserted(c) => {
                trace!(id = c.id, "download_client: store new record");
            }
            UpsertOutcome::Updated(c) => {
                trace!(id = c.id, "download_client: update record");
            }
            UpsertOutcome::Conflict(_) => {
                warn!(name = %name, "download client already exists; insert ignored");
            }
        }
        info!(name = %name, "store download client");
        Ok(outcome.into_client())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientStoreError> {
        self.storage
            .delete(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "could not delete download client"))?;
        info!(id, "delete download client");
        Ok(())
    }
}
