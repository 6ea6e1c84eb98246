//! Terminal front-end for the demand request form.
//!
//! Reads the four fields from stdin, replays the form's live behaviors
//! (character counter, continuous due-date validation), and submits the
//! demand as a card on the configured list.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use demand_desk::adapters::cards::{TrelloCardService, TrelloConfig};
use demand_desk::adapters::clock::SystemClock;
use demand_desk::adapters::console::ConsolePresenter;
use demand_desk::application::FormController;
use demand_desk::config::AppConfig;
use demand_desk::domain::demand::DemandSubmission;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let trello_config = TrelloConfig::from(&config.board);
    let controller = FormController::new(
        Arc::new(TrelloCardService::new(trello_config)),
        Arc::new(ConsolePresenter::new()),
        Arc::new(SystemClock),
    );
    controller.init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let requester = prompt(&mut lines, "Solicitante: ")?;
    let request_type = prompt(&mut lines, "Tipo de solicitação: ")?;
    let details = prompt(&mut lines, "Detalhes: ")?;
    controller.details_changed(&details);
    let due_date = prompt(&mut lines, "Prazo (AAAA-MM-DD): ")?;
    controller.due_date_changed(&due_date);

    controller
        .submit(DemandSubmission {
            requester,
            request_type,
            details,
            due_date,
        })
        .await;

    Ok(())
}

/// Prints a label and reads one trimmed line; end of input reads as blank.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let line = lines.next().transpose()?.unwrap_or_default();
    Ok(line.trim_end().to_string())
}
