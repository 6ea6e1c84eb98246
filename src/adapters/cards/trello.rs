//! Trello card service adapter.
//!
//! Implements [`CardService`] against the Trello REST API: one
//! `POST /cards` per draft, authenticated by the static key/token pair
//! carried in the query string, the new card pinned to the top of its
//! list.
//!
//! # Configuration
//!
//! ```ignore
//! let config = TrelloConfig::new(api_key, api_token, list_id);
//! let service = TrelloCardService::new(config);
//! ```

use async_trait::async_trait;
use chrono::{NaiveDate, SecondsFormat};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::BoardConfig;
use crate::ports::{CardDraft, CardService, CardServiceError, CreatedCard};

/// Placeholder values shipped in `.env.example`; credentials still holding
/// them are treated as absent.
const PLACEHOLDERS: [&str; 3] = [
    "cole_sua_api_key_aqui",
    "cole_seu_token_aqui",
    "cole_o_id_da_lista_aqui",
];

/// Feedback shown when the credential pair was never filled in.
const NOT_CONFIGURED: &str =
    "Configuração do Trello não encontrada. Por favor, configure o arquivo .env.";

/// Trello API configuration.
#[derive(Clone)]
pub struct TrelloConfig {
    /// API key from the Trello power-up admin page.
    api_key: SecretString,

    /// Token generated for that key.
    api_token: SecretString,

    /// List that receives new cards.
    list_id: String,

    /// Base URL for the API (default: <https://api.trello.com/1>).
    base_url: String,
}

impl TrelloConfig {
    /// Creates a configuration from the credential pair and list id.
    pub fn new(
        api_key: impl Into<String>,
        api_token: impl Into<String>,
        list_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_token: SecretString::new(api_token.into()),
            list_id: list_id.into(),
            base_url: "https://api.trello.com/1".to_string(),
        }
    }

    /// Overrides the API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// True when key, token, and list are all present and none still holds
    /// a placeholder value.
    pub fn is_configured(&self) -> bool {
        [
            self.api_key.expose_secret().as_str(),
            self.api_token.expose_secret().as_str(),
            self.list_id.as_str(),
        ]
        .iter()
        .all(|value| !value.is_empty() && !PLACEHOLDERS.contains(value))
    }
}

impl From<&BoardConfig> for TrelloConfig {
    fn from(board: &BoardConfig) -> Self {
        Self {
            api_key: board.api_key.clone(),
            api_token: board.api_token.clone(),
            list_id: board.list_id.clone(),
            base_url: board.base_url.clone(),
        }
    }
}

/// Trello implementation of the card service port.
pub struct TrelloCardService {
    config: TrelloConfig,
    client: Client,
}

impl TrelloCardService {
    /// Creates a new service with the given configuration.
    pub fn new(config: TrelloConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Builds the card creation endpoint URL.
    fn cards_url(&self) -> String {
        format!("{}/cards", self.config.base_url)
    }
}

#[async_trait]
impl CardService for TrelloCardService {
    async fn create_card(&self, draft: CardDraft) -> Result<CreatedCard, CardServiceError> {
        // Credential check comes before any network activity.
        if !self.config.is_configured() {
            tracing::warn!("credentials missing or placeholder, refusing to call the API");
            return Err(CardServiceError::configuration(NOT_CONFIGURED));
        }

        let due = due_timestamp(draft.due_date);

        tracing::debug!(title = %draft.title, due = %due, "creating card");

        let response = self
            .client
            .post(self.cards_url())
            .header("Accept", "application/json")
            .query(&[
                ("key", self.config.api_key.expose_secret().as_str()),
                ("token", self.config.api_token.expose_secret().as_str()),
                ("idList", self.config.list_id.as_str()),
                ("name", draft.title.as_str()),
                ("desc", draft.description.as_str()),
                ("due", due.as_str()),
                ("pos", "top"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "card creation request never reached the API");
                CardServiceError::api(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = failure_message(status.as_u16(), &body);
            tracing::error!(status = status.as_u16(), message = %message, "card creation rejected");
            return Err(CardServiceError::api(message));
        }

        let card: CreatedCard = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "card creation response was not valid JSON");
            CardServiceError::api(e.to_string())
        })?;

        tracing::info!(card_id = %card.id, "card created");
        Ok(card)
    }
}

/// End-of-day due timestamp in RFC 3339, as the API expects.
fn due_timestamp(date: NaiveDate) -> String {
    let end_of_day = date
        .and_hms_opt(23, 59, 59)
        .expect("23:59:59 is a valid time of day");
    end_of_day
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Error body Trello sends alongside a non-2xx status.
#[derive(Debug, Default, Deserialize)]
struct TrelloErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Maps a failed response to the surfaced message: the remote `message`
/// field when present, a status-derived fallback otherwise. Unparseable or
/// empty bodies degrade to the empty default rather than erroring.
fn failure_message(status: u16, body: &str) -> String {
    let error_body: TrelloErrorBody = serde_json::from_str(body).unwrap_or_default();
    error_body
        .message
        .unwrap_or_else(|| format!("Erro na API do Trello: {status}"))
}
