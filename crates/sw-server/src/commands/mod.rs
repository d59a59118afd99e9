//! Subcommand implementations.

pub mod schema;
pub mod serve;
