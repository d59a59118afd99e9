//! Write-side resolvers.

use async_graphql::{Context, ID, Object, Result};

use crate::context::SharedStore;
use crate::types::{MessageInput, MessageObject};

/// Root of all write operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Store a new message and hand back the record with its fresh id.
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: MessageInput,
    ) -> Result<MessageObject> {
        let store = ctx.data::<SharedStore>()?;
        let message = store.write().await.create(input.into());
        Ok(message.into())
    }

    /// Replace the fields of an existing message, keeping its id.
    ///
    /// The input overwrites both fields; there is no merging with what was
    /// stored before.
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: MessageInput,
    ) -> Result<MessageObject> {
        let store = ctx.data::<SharedStore>()?;
        let message = store.write().await.update(id.as_str(), input.into())?;
        Ok(message.into())
    }
}
