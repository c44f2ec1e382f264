//! Conversation manager: the submit state machine.
//!
//! Mediates between raw user input and the answering service for one
//! conversation at a time: validates input, enforces the
//! at-most-one-in-flight gate, appends turns in arrival order, and maps
//! every service outcome into the transcript.

use std::time::Duration;

use tokio::sync::broadcast;

use kosmos_core::{DomainEvent, Timestamp};

use crate::error::ChatError;
use crate::service::{AnswerReply, AnswerRequest, AnswerService};
use crate::transcript::{Author, Conversation, TurnStatus};

/// Shown in place of an answer when the service call fails or times out.
/// The underlying failure goes to the log, never to the transcript.
const FALLBACK_ANSWER: &str = "Sorry, I encountered an error. Please try again.";

/// Default cap on question length in characters.
const DEFAULT_MAX_QUESTION_CHARS: usize = 500;

/// Default per-question timeout.
const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(30);

/// Capacity of the domain-event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Owns conversation creation and question submission.
///
/// Generic over the answering service so hosts wire in the HTTP client and
/// tests script outcomes. One manager can serve any number of independent
/// conversations; each conversation's transcript and pending flag are
/// exclusively its own.
pub struct ConversationManager<S> {
    service: S,
    max_question_chars: usize,
    answer_timeout: Duration,
    event_tx: broadcast::Sender<DomainEvent>,
}

impl<S: AnswerService> ConversationManager<S> {
    /// Create a manager with default limits.
    pub fn new(service: S) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            service,
            max_question_chars: DEFAULT_MAX_QUESTION_CHARS,
            answer_timeout: DEFAULT_ANSWER_TIMEOUT,
            event_tx,
        }
    }

    /// Overrides the question length cap.
    pub fn with_max_question_chars(mut self, max: usize) -> Self {
        self.max_question_chars = max;
        self
    }

    /// Overrides the per-question timeout.
    pub fn with_answer_timeout(mut self, timeout: Duration) -> Self {
        self.answer_timeout = timeout;
        self
    }

    /// Subscribe to transcript / pending change notifications.
    ///
    /// The manager emits an event after every state mutation; a host UI
    /// re-reads `Conversation::turns()` and `Conversation::pending()` on
    /// receipt. Lagging or absent subscribers never block submission.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.event_tx.subscribe()
    }

    /// Open a conversation scoped to a topic, seeded with a greeting turn
    /// that references the topic title.
    pub fn create_conversation(
        &self,
        topic_title: impl Into<String>,
        topic_context: impl Into<String>,
    ) -> Conversation {
        let conversation = Conversation::new(topic_title.into(), topic_context.into());
        tracing::debug!(
            conversation_id = %conversation.id(),
            topic = conversation.topic_title(),
            "conversation opened"
        );
        self.emit(DomainEvent::ConversationOpened {
            conversation_id: conversation.id(),
            topic_title: conversation.topic_title().to_string(),
            timestamp: Timestamp::now(),
        });
        self.emit_transcript_changed(&conversation);
        conversation
    }

    /// Submit a question to the conversation's topic.
    ///
    /// Rejections (`EmptyQuestion`, `QuestionTooLong`, `Busy`) leave the
    /// conversation untouched. An accepted submission appends the user
    /// turn, holds `pending` for the duration of exactly one service call,
    /// then appends the assistant turn (an answer, the service's own
    /// refusal text, or the fixed fallback on transport failure/timeout)
    /// and clears `pending` on every settled path. Dropping the returned
    /// future cancels the in-flight call along with the mutable borrow, so
    /// a torn-down conversation can never be touched by a late response.
    pub async fn submit_question(
        &self,
        conversation: &mut Conversation,
        raw_text: &str,
    ) -> Result<(), ChatError> {
        let question = raw_text.trim();
        if question.is_empty() {
            return self.reject(conversation, ChatError::EmptyQuestion);
        }
        if question.chars().count() > self.max_question_chars {
            return self.reject(
                conversation,
                ChatError::QuestionTooLong(self.max_question_chars),
            );
        }
        if conversation.pending() {
            return self.reject(conversation, ChatError::Busy);
        }

        conversation.append(Author::User, question.to_string(), TurnStatus::Ok);
        self.emit_transcript_changed(conversation);
        conversation.set_pending(true);
        self.emit_pending_changed(conversation);

        let request = AnswerRequest {
            question: question.to_string(),
            topic_title: conversation.topic_title().to_string(),
            topic_context: conversation.topic_context().to_string(),
        };

        let outcome = tokio::time::timeout(self.answer_timeout, self.service.answer(request)).await;

        let (text, status) = match outcome {
            Ok(Ok(AnswerReply::Answer(answer))) => (answer, TurnStatus::Ok),
            Ok(Ok(AnswerReply::Refusal(reason))) => (reason, TurnStatus::Error),
            Ok(Err(err)) => {
                tracing::warn!(
                    conversation_id = %conversation.id(),
                    error = %err,
                    "answer service failed"
                );
                (FALLBACK_ANSWER.to_string(), TurnStatus::Error)
            }
            Err(_elapsed) => {
                tracing::warn!(
                    conversation_id = %conversation.id(),
                    timeout_secs = self.answer_timeout.as_secs(),
                    "answer service did not settle within the timeout"
                );
                (FALLBACK_ANSWER.to_string(), TurnStatus::Error)
            }
        };

        conversation.append(Author::Assistant, text, status);
        conversation.set_pending(false);
        self.emit_transcript_changed(conversation);
        self.emit_pending_changed(conversation);
        Ok(())
    }

    // -- Private helpers --

    fn reject(&self, conversation: &Conversation, error: ChatError) -> Result<(), ChatError> {
        tracing::debug!(
            conversation_id = %conversation.id(),
            reason = error.reason(),
            "question rejected"
        );
        self.emit(DomainEvent::QuestionRejected {
            conversation_id: conversation.id(),
            reason: error.reason().to_string(),
            timestamp: Timestamp::now(),
        });
        Err(error)
    }

    fn emit_transcript_changed(&self, conversation: &Conversation) {
        self.emit(DomainEvent::TranscriptChanged {
            conversation_id: conversation.id(),
            turn_count: conversation.turns().len(),
            timestamp: Timestamp::now(),
        });
    }

    fn emit_pending_changed(&self, conversation: &Conversation) {
        self.emit(DomainEvent::PendingChanged {
            conversation_id: conversation.id(),
            pending: conversation.pending(),
            timestamp: Timestamp::now(),
        });
    }

    fn emit(&self, event: DomainEvent) {
        // No subscribers is fine; the manager never depends on delivery.
        let _ = self.event_tx.send(event);
    }
}

// =============================================================================
// Tests
// =============================================================================
