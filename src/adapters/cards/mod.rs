//! Card service adapters.

mod mock;
mod trello;

pub use mock::MockCardService;
pub use trello::{TrelloCardService, TrelloConfig};
