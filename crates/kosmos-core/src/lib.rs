//! Shared foundation for the Kosmos study assistant.
//!
//! Defines the error type, configuration, domain events, and value types
//! used across the catalog, chat, and answer-service crates.

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::KosmosConfig;
pub use error::{KosmosError, Result};
pub use events::DomainEvent;
pub use types::{Subject, Timestamp};
