//! Reqwest-backed answering service.
//!
//! Speaks the answering endpoint's JSON contract: a request carrying the
//! question plus its topic grounding, and a response of either
//! `{"success": true, "answer": ...}` or `{"success": false, "error": ...}`.
//! A `success: false` body is a refusal the user should read; everything
//! else that goes wrong is a transport failure.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use kosmos_chat::{AnswerError, AnswerReply, AnswerRequest, AnswerService};
use kosmos_core::config::AnswerConfig;
use kosmos_core::KosmosError;

/// Environment variable holding the API key for the answering endpoint.
const API_KEY_ENV: &str = "KOSMOS_API_KEY";

/// HTTP client for the answering service.
#[derive(Clone, Debug)]
pub struct HttpAnswerService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl HttpAnswerService {
    /// Creates a service talking to the given endpoint.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
            model: model.into(),
            max_tokens: 1024,
        }
    }

    /// Builds a service from configuration.
    ///
    /// The endpoint must be set; the API key, if any, is read from
    /// `KOSMOS_API_KEY`. The configured timeout is applied at the client
    /// level in addition to the manager's own per-question timeout.
    pub fn from_config(config: &AnswerConfig) -> Result<Self, KosmosError> {
        if config.endpoint.is_empty() {
            return Err(KosmosError::Config(
                "answer.endpoint is not set; add it to config.toml".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| KosmosError::Config(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: env::var(API_KEY_ENV).ok(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Sets the API key sent as a bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the maximum answer length in tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn answer(&self, request: AnswerRequest) -> Result<AnswerReply, AnswerError> {
        let body = AskRequestBody {
            question: &request.question,
            topic_title: &request.topic_title,
            topic_context: &request.topic_context,
            model: &self.model,
            max_tokens: self.max_tokens,
        };

        let mut http_request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request.send().await.map_err(|err| {
            if err.is_timeout() {
                AnswerError::Timeout
            } else {
                AnswerError::Http(err.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| AnswerError::Http(err.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "answer endpoint returned an error");
            return Err(map_http_error(status, &text));
        }

        decode_reply(&text)
    }
}

#[derive(Serialize)]
struct AskRequestBody<'a> {
    question: &'a str,
    topic_title: &'a str,
    topic_context: &'a str,
    model: &'a str,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct AskResponseBody {
    success: bool,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a 2xx response body into a reply.
fn decode_reply(body: &str) -> Result<AnswerReply, AnswerError> {
    let parsed: AskResponseBody =
        serde_json::from_str(body).map_err(|e| AnswerError::MalformedResponse(e.to_string()))?;

    match parsed {
        AskResponseBody {
            success: true,
            answer: Some(answer),
            ..
        } => Ok(AnswerReply::Answer(answer)),
        AskResponseBody {
            success: false,
            error: Some(error),
            ..
        } => Ok(AnswerReply::Refusal(error)),
        _ => Err(AnswerError::MalformedResponse(
            "response is missing its answer or error field".to_string(),
        )),
    }
}

/// Map a non-2xx response to an error, preferring the body's own message.
fn map_http_error(status: StatusCode, body: &str) -> AnswerError {
    let message = serde_json::from_str::<AskResponseBody>(body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| body.to_string());
    AnswerError::Status {
        code: status.as_u16(),
        message,
    }
}
