//! Terminal presenter.
//!
//! Renders the form's presentation state as terminal lines. A richer
//! front-end would map the same port onto widgets instead of prints.

use chrono::NaiveDate;

use crate::ports::{FormPresenter, FormState};

/// [`FormPresenter`] that writes state changes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl FormPresenter for ConsolePresenter {
    fn set_state(&self, state: FormState) {
        match state {
            FormState::Idle => {}
            FormState::Submitting => println!("Enviando solicitação..."),
            FormState::Success { message } => println!("{message}"),
            FormState::Failed { message } => println!("{message}"),
        }
    }

    fn show_char_count(&self, count: usize) {
        println!("{count} caracteres");
    }

    fn set_due_date_hint(&self, hint: Option<String>) {
        if let Some(hint) = hint {
            println!("Prazo: {hint}");
        }
    }

    fn set_min_due_date(&self, date: NaiveDate) {
        println!("Prazo mínimo: {}", date.format("%d/%m/%Y"));
    }

    fn clear_form(&self) {}
}
