//! Answering-service seam.
//!
//! The conversation manager is generic over [`AnswerService`], keeping the
//! network collaborator behind a trait so tests script it and the HTTP
//! implementation lives in its own crate. The contract distinguishes a
//! service that *responded but declined* ([`AnswerReply::Refusal`]) from a
//! call that *failed to complete* ([`AnswerError`]): both end up as
//! error-status transcript turns, but only the refusal carries text meant
//! for the user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One question, grounded with the topic it was asked about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question: String,
    pub topic_title: String,
    /// Descriptive text of the topic, passed verbatim on every request.
    pub topic_context: String,
}

/// A settled response from the answering service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerReply {
    /// The service produced an answer.
    Answer(String),
    /// The service responded but could not answer; the payload is the
    /// service's own human-readable explanation.
    Refusal(String),
}

/// Transport and protocol failures while calling the answering service.
///
/// None of these reach the user verbatim; the manager logs them and
/// appends a fixed fallback message instead.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("service returned status {code}: {message}")]
    Status { code: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("request timed out")]
    Timeout,
}

/// The external question-answering collaborator.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn answer(&self, request: AnswerRequest) -> Result<AnswerReply, AnswerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_request_serde() {
        let request = AnswerRequest {
            question: "What is an electron?".to_string(),
            topic_title: "Atom".to_string(),
            topic_context: "Basic building block of matter".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let rt: AnswerRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(rt, request);
    }

    #[test]
    fn test_answer_error_display() {
        assert_eq!(
            AnswerError::Http("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            AnswerError::Status {
                code: 503,
                message: "overloaded".to_string(),
            }
            .to_string(),
            "service returned status 503: overloaded"
        );
        assert_eq!(
            AnswerError::MalformedResponse("missing answer".to_string()).to_string(),
            "malformed response: missing answer"
        );
        assert_eq!(AnswerError::Timeout.to_string(), "request timed out");
    }

    #[test]
    fn test_reply_refusal_keeps_text() {
        let reply = AnswerReply::Refusal("That is outside this topic.".to_string());
        if let AnswerReply::Refusal(text) = &reply {
            assert_eq!(text, "That is outside this topic.");
        } else {
            panic!("Expected refusal");
        }
    }
}
