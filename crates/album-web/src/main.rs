use std::path::PathBuf;

use album_store::AlbumStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "album_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = PathBuf::from(std::env::var("ALBUM_ROOT").unwrap_or_else(|_| "uploads".to_string()));
    let addr = std::env::var("ALBUM_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let store = AlbumStore::new(root);
    let app = album_web::app(store.clone());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "album web API listening on http://{addr}, albums stored under {}",
        store.root().display()
    );

    axum::serve(listener, app).await?;
    Ok(())
}
