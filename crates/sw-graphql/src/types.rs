//! Wire-facing object and input types.

use async_graphql::{Context, ID, InputObject, Object, Result, SimpleObject};
use sw_core::{Die, Message, MessageDraft};

use crate::context::Roller;

/// Wire shape of a stored message.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Message")]
pub struct MessageObject {
    /// Identifier assigned when the message was created.
    pub id: ID,
    /// Free-text body of the message.
    pub content: Option<String>,
    /// Name of whoever wrote it.
    pub author: Option<String>,
}

impl From<Message> for MessageObject {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string().into(),
            content: message.content,
            author: message.author,
        }
    }
}

/// Caller-supplied fields for creating or replacing a message.
#[derive(Debug, Clone, InputObject)]
pub struct MessageInput {
    /// Free-text body of the message.
    pub content: Option<String>,
    /// Name of whoever wrote it.
    pub author: Option<String>,
}

impl From<MessageInput> for MessageDraft {
    fn from(input: MessageInput) -> Self {
        Self {
            content: input.content,
            author: input.author,
        }
    }
}

/// A die the caller can keep rolling through nested fields.
///
/// Built by the `getDie` query; carries nothing but its side count, so
/// every field that rolls draws from the shared generator at resolve time.
#[derive(Debug, Clone, Copy)]
pub struct RandomDie {
    die: Die,
}

impl RandomDie {
    pub(crate) fn with_sides(sides: Option<i32>) -> Self {
        Self {
            die: Die::with_sides(sides),
        }
    }
}

#[Object]
impl RandomDie {
    /// The number of sides on this die.
    async fn num_sides(&self) -> u32 {
        self.die.sides()
    }

    /// Roll the die once.
    async fn roll_once(&self, ctx: &Context<'_>) -> Result<u32> {
        let roller = ctx.data::<Roller>()?;
        Ok(roller.with_rng(|rng| self.die.roll_once(rng)).await)
    }

    /// Roll the die `numRolls` times.
    async fn roll(&self, ctx: &Context<'_>, num_rolls: i32) -> Result<Vec<u32>> {
        let roller = ctx.data::<Roller>()?;
        Ok(roller.with_rng(|rng| self.die.roll(num_rolls, rng)).await)
    }
}
