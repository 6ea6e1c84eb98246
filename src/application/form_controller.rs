//! FormController - owns the submission lifecycle and the form's live
//! behaviors.
//!
//! Wires the validator, formatter, and card service together and drives
//! the presentation port through Idle → Submitting → {Success, Failed} →
//! Idle. The loading indicator is cleared on every exit path: each arm of
//! [`FormController::submit`] ends by pushing a terminal [`FormState`] and
//! returning the phase to Idle, so the machine can never rest in
//! Submitting.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::demand::{
    card_description, card_title, DemandSubmission, DemandValidationError,
};
use crate::domain::submission::{StateMachine, SubmissionPhase};
use crate::ports::{CardDraft, CardService, Clock, FormPresenter, FormState};

/// How long success feedback stays visible before auto-dismissing.
const SUCCESS_FEEDBACK_TTL: Duration = Duration::from_secs(5);

/// Feedback shown when the card was filed.
const SUCCESS_MESSAGE: &str =
    "✅ Sucesso! Sua demanda foi enviada para o Trello e nossa equipe já foi notificada.";

/// Inline hint set on the due-date input while it holds a past date.
const DUE_DATE_HINT: &str = "Selecione uma data futura";

/// Controller for the demand request form.
///
/// Holds at most one submission in flight; a submit arriving while another
/// is Submitting is rejected by the phase machine (the submit affordance
/// is disabled then anyway).
pub struct FormController {
    cards: Arc<dyn CardService>,
    presenter: Arc<dyn FormPresenter>,
    clock: Arc<dyn Clock>,
    phase: Mutex<SubmissionPhase>,
}

impl FormController {
    pub fn new(
        cards: Arc<dyn CardService>,
        presenter: Arc<dyn FormPresenter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cards,
            presenter,
            clock,
            phase: Mutex::new(SubmissionPhase::Idle),
        }
    }

    /// Prepares the form: the earliest selectable due date is today.
    pub fn init(&self) {
        self.presenter.set_min_due_date(self.clock.today());
        tracing::info!("demand request form initialized");
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.lock().expect("phase lock poisoned")
    }

    /// Processes one submit action end to end.
    pub async fn submit(&self, submission: DemandSubmission) {
        {
            let mut phase = self.phase.lock().expect("phase lock poisoned");
            match phase.transition_to(SubmissionPhase::Submitting) {
                Ok(next) => *phase = next,
                Err(rejected) => {
                    tracing::warn!(%rejected, "submit ignored");
                    return;
                }
            }
        }
        self.presenter.set_state(FormState::Submitting);

        let today = self.clock.today();
        let request = match submission.validate(today) {
            Ok(request) => request,
            Err(reason) => {
                // Rejected locally; the card service is never consulted.
                tracing::warn!(%reason, "submission rejected by validation");
                self.finish(
                    SubmissionPhase::Failed,
                    FormState::Failed {
                        message: reason.user_message().to_string(),
                    },
                );
                return;
            }
        };

        let draft = CardDraft {
            title: card_title(&request),
            description: card_description(&request),
            due_date: request.due_date,
        };

        match self.cards.create_card(draft).await {
            Ok(card) => {
                tracing::info!(card_id = %card.id, "demand request filed");
                self.finish(
                    SubmissionPhase::Success,
                    FormState::Success {
                        message: SUCCESS_MESSAGE.to_string(),
                    },
                );
                self.presenter.clear_form();
                self.presenter.show_char_count(0);
                self.schedule_feedback_dismissal();
            }
            Err(error) => {
                tracing::error!(%error, "demand request could not be filed");
                self.finish(
                    SubmissionPhase::Failed,
                    FormState::Failed {
                        message: format!(
                            "❌ Erro ao enviar solicitação: {error}. Por favor, \
                             tente novamente ou entre em contato com o suporte."
                        ),
                    },
                );
            }
        }
    }

    /// Keystroke handler for the details field.
    pub fn details_changed(&self, details: &str) {
        self.presenter.show_char_count(details.chars().count());
    }

    /// Change handler for the due-date input: validated continuously, not
    /// just at submit time.
    pub fn due_date_changed(&self, raw: &str) {
        let valid = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| date >= self.clock.today())
            .unwrap_or(false);

        if valid {
            self.presenter.set_due_date_hint(None);
            self.presenter.set_state(FormState::Idle);
        } else {
            self.presenter
                .set_due_date_hint(Some(DUE_DATE_HINT.to_string()));
            self.presenter.set_state(FormState::Failed {
                message: DemandValidationError::DueDateInPast
                    .user_message()
                    .to_string(),
            });
        }
    }

    /// Input handler for the due-date field: editing clears a stale hint.
    pub fn due_date_edited(&self) {
        self.presenter.set_due_date_hint(None);
    }

    /// Pushes the terminal state to the presenter (clearing the loading
    /// indicator) and returns the machine to Idle, ready for the next
    /// submission.
    fn finish(&self, terminal: SubmissionPhase, state: FormState) {
        self.presenter.set_state(state);
        let mut phase = self.phase.lock().expect("phase lock poisoned");
        let reached = phase
            .transition_to(terminal)
            .expect("Submitting reaches both terminal phases");
        *phase = reached
            .transition_to(SubmissionPhase::Idle)
            .expect("terminal phases return to Idle");
    }

    /// Success feedback auto-dismisses after five seconds; error feedback
    /// stays until the next interaction replaces it.
    fn schedule_feedback_dismissal(&self) {
        let presenter = Arc::clone(&self.presenter);
        tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_FEEDBACK_TTL).await;
            presenter.set_state(FormState::Idle);
        });
    }
}
