//! Binary entrypoint for the date API service.

use date_api::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env();
  date_api::serve(config).await
}
