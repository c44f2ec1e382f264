//! Error types for the conversation core.

/// Precondition rejections from `submit_question`.
///
/// These never mutate conversation state and are never rendered into the
/// transcript; hosts typically disable the submit control instead of
/// showing them. Answer-service failures are not errors at this level;
/// they are recovered into error-status transcript turns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("question cannot be empty")]
    EmptyQuestion,
    #[error("question exceeds maximum length of {0} characters")]
    QuestionTooLong(usize),
    #[error("a question is already awaiting an answer")]
    Busy,
}

impl ChatError {
    /// Short stable name used in `QuestionRejected` events and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            ChatError::EmptyQuestion => "empty",
            ChatError::QuestionTooLong(_) => "too_long",
            ChatError::Busy => "busy",
        }
    }
}

impl From<ChatError> for kosmos_core::KosmosError {
    fn from(err: ChatError) -> Self {
        kosmos_core::KosmosError::Chat(err.to_string())
    }
}
