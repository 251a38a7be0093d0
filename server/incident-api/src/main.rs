//! Binary entrypoint for the incident API.

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use doc_store::{EsClient, StoreConfig};
use incident_api::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().init();

  let config = StoreConfig::from_env()?;
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "8000".into())
    .parse()
    .expect("PORT must be a valid u16");

  let store = EsClient::new(&config)?;
  let state = Arc::new(AppState {
    store,
    incidents_index: config.incidents_index,
  });

  let app = router(state).layer(CorsLayer::permissive());

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  info!("incident-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
