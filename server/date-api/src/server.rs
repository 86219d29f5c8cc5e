//! Router construction and the serve loop.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::handlers;

/// Build the service router: API routes, permissive CORS on all of them,
/// static assets from the public directory for everything else.
pub fn router(config: &Config) -> Router {
  Router::new()
    .route("/api", get(handlers::current_date))
    .route("/api/:date", get(handlers::resolve_date))
    .route("/api/diff/:date1/:date2", get(handlers::diff_dates))
    .fallback_service(ServeDir::new(&config.public_dir))
    .layer(CorsLayer::permissive())
}

/// Bind and run the server until the process exits.
pub async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
  let app = router(&config);
  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  println!("date-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
