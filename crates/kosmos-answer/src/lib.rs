//! HTTP implementation of the answering-service collaborator.

mod http;

pub use http::HttpAnswerService;
