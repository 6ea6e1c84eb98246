//! Card service port - files one task card with the external tracker.
//!
//! # Design
//!
//! - One operation: create a card from an already-formatted draft
//! - Configuration problems are distinguished from remote rejections so the
//!   controller can surface the right feedback
//! - Implementations make at most one network call per draft; retries are
//!   out of scope

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Port for creating task cards on the external tracking service.
#[async_trait]
pub trait CardService: Send + Sync {
    /// Files the draft as a new card at the top of the destination list.
    async fn create_card(&self, draft: CardDraft) -> Result<CreatedCard, CardServiceError>;
}

/// A fully formatted card, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    /// Card title, `[<type>] - <requester>`.
    pub title: String,
    /// Markdown body.
    pub description: String,
    /// Deadline; implementations send it as an end-of-day timestamp.
    pub due_date: NaiveDate,
}

/// The created card as the remote service returned it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedCard {
    /// Remote identifier of the new card.
    pub id: String,

    /// Card title echoed back.
    #[serde(default)]
    pub name: String,

    /// Browser URL of the card, when the service provides one.
    #[serde(default)]
    pub url: Option<String>,

    /// Everything else the service sent, kept as received.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Failures while filing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardServiceError {
    /// Credentials or destination are unset or still placeholders; no
    /// network call was attempted.
    #[error("{0}")]
    Configuration(String),

    /// The remote service rejected the request or was unreachable.
    #[error("{0}")]
    Api(String),
}

impl CardServiceError {
    /// Configuration-level failure, raised before any network call.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Remote rejection or transport failure.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}
