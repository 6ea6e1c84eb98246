//! Mock card service for tests.
//!
//! Scripted results consumed in FIFO order, with call recording so tests
//! can assert exactly what would have gone out on the wire.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{CardDraft, CardService, CardServiceError, CreatedCard};

/// Configurable [`CardService`] double.
#[derive(Default)]
pub struct MockCardService {
    results: Mutex<VecDeque<Result<CreatedCard, CardServiceError>>>,
    calls: Mutex<Vec<CardDraft>>,
}

impl MockCardService {
    /// Creates a mock with no scripted results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful creation returning a card with the given id.
    pub fn with_success(self, card_id: impl Into<String>) -> Self {
        let card = CreatedCard {
            id: card_id.into(),
            ..CreatedCard::default()
        };
        self.results.lock().unwrap().push_back(Ok(card));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: CardServiceError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Drafts received so far, in call order.
    pub fn calls(&self) -> Vec<CardDraft> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of creation attempts that reached the service.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CardService for MockCardService {
    async fn create_card(&self, draft: CardDraft) -> Result<CreatedCard, CardServiceError> {
        self.calls.lock().unwrap().push(draft);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CardServiceError::api("no scripted response left")))
    }
}
