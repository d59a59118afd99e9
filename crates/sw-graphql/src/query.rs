//! Read-side resolvers.

use async_graphql::{Context, ID, Object, Result};
use rand::Rng;
use sw_core::{Die, quote_of_the_day};

use crate::context::{ClientAddr, Roller, SharedStore};
use crate::types::{MessageObject, RandomDie};

/// Root of all read operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Friendly smoke-test field.
    async fn hello(&self) -> &'static str {
        "Hello World"
    }

    /// One of two stock quotes, flipped per request.
    async fn quote_of_the_day(&self, ctx: &Context<'_>) -> Result<&'static str> {
        let roller = ctx.data::<Roller>()?;
        Ok(roller.with_rng(quote_of_the_day).await)
    }

    /// A float in `[0, 1)`.
    async fn random(&self, ctx: &Context<'_>) -> Result<f64> {
        let roller = ctx.data::<Roller>()?;
        Ok(roller.with_rng(|rng| rng.random::<f64>()).await)
    }

    /// Three six-sided dice, rolled together.
    async fn roll_three_dice(&self, ctx: &Context<'_>) -> Result<Vec<u32>> {
        let roller = ctx.data::<Roller>()?;
        let die = Die::with_sides(None);
        Ok(roller.with_rng(|rng| die.roll(3, rng)).await)
    }

    /// Roll `numDice` dice with `numSides` sides each.
    ///
    /// Leaving `numSides` out picks the six-sided default; asking for zero
    /// or fewer dice yields an empty list.
    async fn roll_dice(
        &self,
        ctx: &Context<'_>,
        num_dice: i32,
        num_sides: Option<i32>,
    ) -> Result<Vec<u32>> {
        let roller = ctx.data::<Roller>()?;
        let die = Die::with_sides(num_sides);
        Ok(roller.with_rng(|rng| die.roll(num_dice, rng)).await)
    }

    /// A die object whose fields roll on demand.
    async fn get_die(&self, num_sides: Option<i32>) -> RandomDie {
        RandomDie::with_sides(num_sides)
    }

    /// Look up a message by id.
    ///
    /// Unknown ids fail the field with the store's not-found message; the
    /// rest of the selection set still resolves.
    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> Result<MessageObject> {
        let store = ctx.data::<SharedStore>()?;
        let message = store.read().await.get(id.as_str())?;
        Ok(message.into())
    }

    /// The address this request came from.
    async fn ip(&self, ctx: &Context<'_>) -> Result<String> {
        Ok(ctx.data::<ClientAddr>()?.to_string())
    }
}
