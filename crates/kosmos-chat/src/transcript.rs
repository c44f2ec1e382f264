//! Turn and conversation data model.
//!
//! A conversation is an append-only transcript scoped to one topic. Turn
//! ids are assigned from a private monotonic counter at append time; turns
//! are never edited, removed, or reordered after insertion. All mutation
//! goes through the conversation manager in this crate; the rest of the
//! workspace only reads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kosmos_core::Timestamp;

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// Outcome classification of a turn.
///
/// Only meaningful for assistant turns; user turns are always `Ok`. An
/// `Error` assistant turn carries a human-readable message (a service
/// refusal or the fixed transport fallback), distinguished here rather
/// than by content sniffing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnStatus {
    Ok,
    Error,
}

/// One message in a conversation transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Monotonically increasing within the conversation, never reused.
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub status: TurnStatus,
    /// Creation time, used only for display.
    pub created_at: Timestamp,
}

/// An in-memory conversation about one topic.
///
/// Holds the immutable topic scope, the ordered transcript, and the
/// pending flag that is true exactly while an answering-service call is
/// outstanding. Lives only as long as the hosting view; nothing is
/// persisted.
#[derive(Debug, Serialize)]
pub struct Conversation {
    id: Uuid,
    topic_title: String,
    topic_context: String,
    turns: Vec<Turn>,
    pending: bool,
    next_turn_id: u64,
}

impl Conversation {
    pub(crate) fn new(topic_title: String, topic_context: String) -> Self {
        let greeting = format!(
            "Hi! I'm your study assistant for {topic_title}. \
             Ask me anything about this topic and I'll help you learn!"
        );
        let mut conversation = Self {
            id: Uuid::new_v4(),
            topic_title,
            topic_context,
            turns: Vec::new(),
            pending: false,
            next_turn_id: 1,
        };
        conversation.append(Author::Assistant, greeting, TurnStatus::Ok);
        conversation
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn topic_title(&self) -> &str {
        &self.topic_title
    }

    pub fn topic_context(&self) -> &str {
        &self.topic_context
    }

    /// The transcript, oldest turn first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True exactly while an answering-service call is outstanding.
    pub fn pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn append(&mut self, author: Author, text: String, status: TurnStatus) {
        let turn = Turn {
            id: self.next_turn_id,
            author,
            text,
            status,
            created_at: Timestamp::now(),
        };
        self.next_turn_id += 1;
        self.turns.push(turn);
    }

    pub(crate) fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }
}
