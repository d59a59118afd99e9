//! HTTP serving layer for the Spielwiese GraphQL API.
//!
//! The `sw` binary in this package drives [`http::serve`]; the router is
//! exposed on its own so callers can mount it on any listener.

pub mod http;
