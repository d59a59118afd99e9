//! Core types for Spielwiese: message records, the in-memory store, and dice.
//!
//! Everything stateful or random behind the API lives here, and nothing
//! about the wire surface does. The crate is synchronous and runtime-free;
//! the layers above decide how it is shared.

pub mod die;
pub mod error;
pub mod message;
pub mod quote;
pub mod store;

pub use die::{DEFAULT_SIDES, Die};
pub use error::{StoreError, StoreResult};
pub use message::{Message, MessageDraft, MessageId};
pub use quote::{QUOTES, quote_of_the_day};
pub use store::MessageStore;
