use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Domain events emitted by the conversation core.
///
/// Events are emitted by the conversation manager after state changes and
/// consumed by whatever presentation layer hosts it (CLI render loop, UI
/// binding, event log). Delivery uses a `tokio::sync::broadcast` channel;
/// the emitter never blocks on slow or absent subscribers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DomainEvent {
    /// A conversation was created and seeded with its greeting turn.
    ConversationOpened {
        conversation_id: Uuid,
        topic_title: String,
        timestamp: Timestamp,
    },

    /// A turn was appended to a conversation's transcript.
    TranscriptChanged {
        conversation_id: Uuid,
        turn_count: usize,
        timestamp: Timestamp,
    },

    /// The pending flag of a conversation flipped.
    PendingChanged {
        conversation_id: Uuid,
        pending: bool,
        timestamp: Timestamp,
    },

    /// A submission was rejected without touching conversation state.
    QuestionRejected {
        conversation_id: Uuid,
        reason: String,
        timestamp: Timestamp,
    },
}

impl DomainEvent {
    /// Returns the timestamp of the event.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            DomainEvent::ConversationOpened { timestamp, .. }
            | DomainEvent::TranscriptChanged { timestamp, .. }
            | DomainEvent::PendingChanged { timestamp, .. }
            | DomainEvent::QuestionRejected { timestamp, .. } => *timestamp,
        }
    }

    /// Returns a stable event name for logging and subscribers.
    pub fn event_name(&self) -> &'static str {
        match self {
            DomainEvent::ConversationOpened { .. } => "conversation_opened",
            DomainEvent::TranscriptChanged { .. } => "transcript_changed",
            DomainEvent::PendingChanged { .. } => "pending_changed",
            DomainEvent::QuestionRejected { .. } => "question_rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_timestamp() {
        let ts = Timestamp::now();
        let event = DomainEvent::ConversationOpened {
            conversation_id: Uuid::new_v4(),
            topic_title: "Atom".to_string(),
            timestamp: ts,
        };
        assert_eq!(event.timestamp(), ts);
    }

    #[test]
    fn test_event_names() {
        let ts = Timestamp::now();
        let id = Uuid::new_v4();

        let opened = DomainEvent::ConversationOpened {
            conversation_id: id,
            topic_title: "Atom".to_string(),
            timestamp: ts,
        };
        assert_eq!(opened.event_name(), "conversation_opened");

        let transcript = DomainEvent::TranscriptChanged {
            conversation_id: id,
            turn_count: 3,
            timestamp: ts,
        };
        assert_eq!(transcript.event_name(), "transcript_changed");

        let pending = DomainEvent::PendingChanged {
            conversation_id: id,
            pending: true,
            timestamp: ts,
        };
        assert_eq!(pending.event_name(), "pending_changed");

        let rejected = DomainEvent::QuestionRejected {
            conversation_id: id,
            reason: "busy".to_string(),
            timestamp: ts,
        };
        assert_eq!(rejected.event_name(), "question_rejected");
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let ts = Timestamp(1700000000);
        let id = Uuid::new_v4();

        let events = vec![
            DomainEvent::ConversationOpened {
                conversation_id: id,
                topic_title: "Reflection & Refraction Prism".to_string(),
                timestamp: ts,
            },
            DomainEvent::TranscriptChanged {
                conversation_id: id,
                turn_count: 2,
                timestamp: ts,
            },
            DomainEvent::PendingChanged {
                conversation_id: id,
                pending: false,
                timestamp: ts,
            },
            DomainEvent::QuestionRejected {
                conversation_id: id,
                reason: "empty".to_string(),
                timestamp: ts,
            },
        ];

        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let rt: DomainEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event.event_name(), rt.event_name());
            assert_eq!(event.timestamp(), rt.timestamp());
        }
    }

    #[test]
    fn test_pending_changed_preserves_flag() {
        let event = DomainEvent::PendingChanged {
            conversation_id: Uuid::new_v4(),
            pending: true,
            timestamp: Timestamp::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let rt: DomainEvent = serde_json::from_str(&json).unwrap();
        if let DomainEvent::PendingChanged { pending, .. } = rt {
            assert!(pending);
        } else {
            panic!("Expected PendingChanged after round-trip");
        }
    }
}
