//! The in-memory message store.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::message::{Message, MessageDraft, MessageId};

/// In-memory mapping from message id to message fields.
///
/// Owns all the mutable state behind the API. Nothing is persisted:
/// contents live exactly as long as the store does. The store itself is
/// synchronous; callers that share it across tasks wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: HashMap<MessageId, MessageDraft>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a message by id.
    ///
    /// The id is taken in string form as it arrives off the wire; an
    /// unparseable id fails the same way an absent one does, with
    /// [`StoreError::MessageNotFound`] carrying the caller's string.
    pub fn get(&self, id: &str) -> StoreResult<Message> {
        let key = MessageId::parse(id)
            .ok_or_else(|| StoreError::MessageNotFound(id.to_string()))?;
        let draft = self
            .messages
            .get(&key)
            .ok_or_else(|| StoreError::MessageNotFound(id.to_string()))?;
        Ok(Message::new(key, draft.clone()))
    }

    /// Set the fields stored under an id, unconditionally.
    pub fn put(&mut self, id: MessageId, draft: MessageDraft) {
        self.messages.insert(id, draft);
    }

    /// Store a draft under a freshly generated id and return the record.
    pub fn create(&mut self, draft: MessageDraft) -> Message {
        let id = MessageId::generate();
        self.put(id, draft.clone());
        Message::new(id, draft)
    }

    /// Overwrite an existing message, keeping its id.
    ///
    /// Both fields are replaced by the draft; a field the draft leaves
    /// unset comes back cleared, not carried over. Fails with
    /// [`StoreError::MessageNotFound`] if the id is unknown.
    pub fn update(&mut self, id: &str, draft: MessageDraft) -> StoreResult<Message> {
        let key = MessageId::parse(id)
            .ok_or_else(|| StoreError::MessageNotFound(id.to_string()))?;
        let slot = self
            .messages
            .get_mut(&key)
            .ok_or_else(|| StoreError::MessageNotFound(id.to_string()))?;
        *slot = draft.clone();
        Ok(Message::new(key, draft))
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
