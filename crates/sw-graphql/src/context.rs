//! Shared state resolvers reach through the schema context.

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sw_core::MessageStore;
use tokio::sync::{Mutex, RwLock};

/// Handle to the message store, shared across requests.
pub type SharedStore = Arc<RwLock<MessageStore>>;

/// Create an empty store ready to hang on the schema.
pub fn shared_store() -> SharedStore {
    Arc::new(RwLock::new(MessageStore::new()))
}

/// The generator every random field draws from.
///
/// A single locked generator keeps draws globally ordered, so a seeded run
/// replays the same values query by query.
#[derive(Debug)]
pub struct Roller {
    rng: Mutex<StdRng>,
}

impl Roller {
    /// Seed the roller for a reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seed the roller from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Run a closure with exclusive access to the generator.
    ///
    /// The lock is held only for the closure, never across an await point
    /// in the caller.
    pub async fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().await;
        f(&mut rng)
    }
}

/// Address the current request came from, as seen by the listener.
///
/// The HTTP layer attaches one to every request it executes; resolvers read
/// it back out of the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientAddr(pub IpAddr);

impl fmt::Display for ClientAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
