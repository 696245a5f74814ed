use clientstore::config::Config;
use clientstore::{ClientStore, DownloadClientService, db};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(database_url = %cfg.database_url, loglevel = %cfg.loglevel);

    let pool = db::connect(&cfg.database_url).await?;
    let storage = ClientStore::new(pool);
    storage.init_schema().await?;

    let service = DownloadClientService::new(storage);
    let clients = service.list().await?;
    info!(count = clients.len(), "download clients loaded");
    for c in &clients {
        info!(
            id = c.id,
            name = %c.name,
            kind = %c.client_type,
            enabled = c.enabled,
            host = %c.host,
            port = c.port,
            tls = c.use_tls,
            "download client"
        );
    }
    Ok(())
}
