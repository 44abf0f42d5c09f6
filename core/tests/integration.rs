//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP through `UreqTransport`. A second case points the
//! client at a closed port to check transport failures surface as
//! `RequestError` without a decode attempt.

use std::net::SocketAddr;
use std::time::Duration;

use githubjobs::{JobsClient, Listing, Stringify, UreqTransport};

/// Start the mock server on a random port in its own runtime thread.
fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> JobsClient {
    JobsClient::try_new(
        &format!("http://{addr}"),
        UreqTransport::with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

fn titles(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.title.as_str()).collect()
}

#[test]
fn every_operation_against_mock_server() {
    let client = client_for(spawn_server());

    // Step 1: keyword search with a space in the description.
    let listings = client.positions("go jobs", "", false).unwrap();
    assert_eq!(titles(&listings), ["Go Jobs Platform Engineer"]);

    // Step 2: full-time filter.
    let listings = client.positions("rust", "", true).unwrap();
    assert_eq!(titles(&listings), ["Backend Developer (Rust)"]);

    // Step 3: no matches is an empty sequence, not an error.
    let listings = client.positions("cobol", "", false).unwrap();
    assert!(listings.is_empty(), "expected empty list");

    // Step 4: coordinate search keeps server order.
    let listings = client
        .positions_by_coordinates("47.6062100", "-122.3320700")
        .unwrap();
    assert_eq!(titles(&listings), ["Senior Go Engineer", "Rust Contractor"]);

    // Step 5: malformed coordinates are passed through; the server's error
    // object is not a list, so decoding fails.
    let err = client.positions_by_coordinates("north", "west").unwrap_err();
    assert!(err.message.starts_with("Could not read JSON response"), "{err}");

    // Step 6: lookup by id returns every field verbatim.
    let listing = client
        .position("4dfece3c-97c4-11e6-97f0-6745f96d2097")
        .unwrap();
    assert_eq!(listing.id, "4dfece3c-97c4-11e6-97f0-6745f96d2097");
    assert_eq!(listing.title, "Senior Go Engineer");
    assert_eq!(listing.location, "Seattle, WA");
    assert_eq!(listing.kind, "Full Time");
    assert_eq!(listing.company, "Emerald Freight");
    assert_eq!(listing.company_logo, "https://emerald-freight.example/logo.png");
    assert_eq!(
        listing.url,
        "https://jobs.github.com/positions/4dfece3c-97c4-11e6-97f0-6745f96d2097"
    );
    assert!(listing.stringify().starts_with(r#"Listing{id:"4dfece3c"#));

    // Step 7: unknown id.
    let err = client
        .position("00000000-0000-0000-0000-000000000000")
        .unwrap_err();
    assert_eq!(err.message, "Could not find position: Job not found");
}

#[test]
fn refused_connection_is_a_request_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = client_for(addr);

    for err in [
        client.positions("go", "", false).unwrap_err(),
        client.positions_by_coordinates("1", "2").unwrap_err(),
        client.position("abc").unwrap_err(),
    ] {
        assert!(err.message.starts_with("Failed to make request"), "{err}");
        assert_eq!(err.code, githubjobs::RequestError::SENTINEL_CODE);
    }
}
