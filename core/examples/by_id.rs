//! Fetch a single listing by identifier.
//!
//! Usage: `cargo run --example by_id -- [id]`

use std::error::Error;

use githubjobs::JobsClient;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "4dfece3c-97c4-11e6-97f0-6745f96d2097".to_string());

    let client = JobsClient::from_env()?;
    let listing = client.position(&id)?;
    println!("{listing}");
    Ok(())
}
