//! Search listings by description and location.
//!
//! Usage: `cargo run --example by_description -- <description> [location] [--full-time]`
//! Set `GITHUBJOBS_ENDPOINT` to point at another server (e.g. the mock server).

use std::error::Error;

use githubjobs::{JobsClient, Stringify};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let full_time = args.iter().any(|a| a == "--full-time");
    args.retain(|a| a != "--full-time");

    let description = args.first().map(String::as_str).unwrap_or("go");
    let location = args.get(1).map(String::as_str).unwrap_or("");

    let client = JobsClient::from_env()?;
    let listings = client.positions(description, location, full_time)?;
    match listings.first() {
        Some(first) => println!("{}", first.stringify()),
        None => println!("no listings for {description:?}"),
    }
    Ok(())
}
