//! The `serve` subcommand: run the HTTP server until interrupted.

use std::net::{IpAddr, SocketAddr};

use sw_graphql::{Roller, build_schema, shared_store};
use sw_server::http;

/// Build the schema and serve it on the given address.
///
/// An explicit seed makes every random field replayable across runs;
/// without one the dice draw from OS entropy.
pub async fn run(host: IpAddr, port: u16, seed: Option<u64>) -> Result<(), String> {
    let roller = match seed {
        Some(seed) => Roller::seeded(seed),
        None => Roller::from_entropy(),
    };
    let schema = build_schema(shared_store(), roller);
    http::serve(schema, SocketAddr::new(host, port)).await
}
