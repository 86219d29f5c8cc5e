//! Service configuration read from the environment.

use std::path::PathBuf;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
  /// TCP port to listen on.
  pub port: u16,
  /// Directory served as static assets for unmatched routes.
  pub public_dir: PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      port: 3000,
      public_dir: PathBuf::from("public"),
    }
  }
}

impl Config {
  /// Read PORT and PUBLIC_DIR, falling back to the defaults when unset.
  pub fn from_env() -> Self {
    let defaults = Self::default();
    let port = std::env::var("PORT")
      .map(|v| v.parse().expect("PORT must be a valid u16"))
      .unwrap_or(defaults.port);
    let public_dir = std::env::var("PUBLIC_DIR")
      .map(PathBuf::from)
      .unwrap_or(defaults.public_dir);
    Self { port, public_dir }
  }
}
