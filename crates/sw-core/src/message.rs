//! Message records and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored message.
///
/// Rendered as 32 lowercase hex characters. Ids are generated without
/// consulting existing keys; the bit width makes a collision negligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(#[serde(with = "uuid::serde::simple")] pub Uuid);

impl MessageId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its string form.
    ///
    /// Accepts the simple form produced by `Display` as well as the
    /// hyphenated form. Returns `None` for anything else; callers treat an
    /// unparseable id exactly like an absent one.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::try_parse(s).ok().map(Self)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// The caller-supplied fields of a message, without its id.
///
/// This is the shape the store keeps per id and the shape mutations accept
/// as input. Both fields are optional even on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    /// Free-text body of the message.
    pub content: Option<String>,
    /// Name of whoever wrote it.
    pub author: Option<String>,
}

impl MessageDraft {
    /// Create a draft with both fields set.
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            author: Some(author.into()),
        }
    }
}

/// A stored message record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identifier assigned by the store on creation.
    pub id: MessageId,
    /// Free-text body of the message.
    pub content: Option<String>,
    /// Name of whoever wrote it.
    pub author: Option<String>,
}

impl Message {
    /// Assemble a record from an id and the fields stored under it.
    pub fn new(id: MessageId, draft: MessageDraft) -> Self {
        Self {
            id,
            content: draft.content,
            author: draft.author,
        }
    }
}
