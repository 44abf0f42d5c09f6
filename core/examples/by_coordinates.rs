//! Search listings near a point given in decimal degrees.
//!
//! Usage: `cargo run --example by_coordinates -- [latitude] [longitude]`

use std::error::Error;

use githubjobs::{JobsClient, Stringify};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let latitude = args.first().map(String::as_str).unwrap_or("47.6062100");
    let longitude = args.get(1).map(String::as_str).unwrap_or("-122.3320700");

    let client = JobsClient::from_env()?;
    let listings = client.positions_by_coordinates(latitude, longitude)?;
    println!("{}", listings.stringify());
    Ok(())
}
