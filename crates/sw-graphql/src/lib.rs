//! GraphQL surface of Spielwiese.
//!
//! Provides the full schema for the demo API:
//! - [`QueryRoot`]: greeting, random scalars, dice, message lookup
//! - [`MutationRoot`]: creating and replacing messages
//!
//! State lives on the schema context: the message store behind a
//! [`SharedStore`] lock and the dice generator behind a [`Roller`]. The
//! client address is per-request data the HTTP layer injects.

mod context;
mod mutation;
mod query;
mod types;

pub use context::{ClientAddr, Roller, SharedStore, shared_store};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{MessageInput, MessageObject, RandomDie};

use async_graphql::{EmptySubscription, Schema};

/// Schema type served over HTTP.
pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with its shared state hung on the context.
pub fn build_schema(store: SharedStore, roller: Roller) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(roller)
        .finish()
}
