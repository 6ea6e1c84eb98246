//! End-to-end submission scenarios: a controller wired to a mock card
//! service, a fixed clock, and a recording presenter standing in for the
//! rendering layer.

use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate};

use demand_desk::adapters::cards::MockCardService;
use demand_desk::adapters::clock::FixedClock;
use demand_desk::application::FormController;
use demand_desk::domain::demand::DemandSubmission;
use demand_desk::ports::{CardServiceError, FormPresenter, FormState};

/// Presenter double that renders into memory: the feedback states seen, the
/// character counter text, the inline hint, and whether the fields still
/// hold their values.
#[derive(Default)]
struct HeadlessForm {
    states: Mutex<Vec<FormState>>,
    char_counter: Mutex<String>,
    due_date_hint: Mutex<Option<String>>,
    min_due_date: Mutex<Option<NaiveDate>>,
    fields_cleared: Mutex<bool>,
}

impl HeadlessForm {
    fn states(&self) -> Vec<FormState> {
        self.states.lock().unwrap().clone()
    }

    fn due_date_hint(&self) -> Option<String> {
        self.due_date_hint.lock().unwrap().clone()
    }

    fn min_due_date(&self) -> Option<NaiveDate> {
        *self.min_due_date.lock().unwrap()
    }

    fn last_state(&self) -> FormState {
        self.states().last().cloned().expect("no state was ever set")
    }

    fn char_counter(&self) -> String {
        self.char_counter.lock().unwrap().clone()
    }

    fn fields_cleared(&self) -> bool {
        *self.fields_cleared.lock().unwrap()
    }
}

impl FormPresenter for HeadlessForm {
    fn set_state(&self, state: FormState) {
        self.states.lock().unwrap().push(state);
    }

    fn show_char_count(&self, count: usize) {
        *self.char_counter.lock().unwrap() = format!("{count} caracteres");
    }

    fn set_due_date_hint(&self, hint: Option<String>) {
        *self.due_date_hint.lock().unwrap() = hint;
    }

    fn set_min_due_date(&self, date: NaiveDate) {
        *self.min_due_date.lock().unwrap() = Some(date);
    }

    fn clear_form(&self) {
        *self.fields_cleared.lock().unwrap() = true;
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn wire(cards: MockCardService) -> (FormController, Arc<MockCardService>, Arc<HeadlessForm>) {
    let cards = Arc::new(cards);
    let form = Arc::new(HeadlessForm::default());
    let controller = FormController::new(
        cards.clone(),
        form.clone(),
        Arc::new(FixedClock(today())),
    );
    (controller, cards, form)
}

fn ana_reports_a_bug() -> DemandSubmission {
    DemandSubmission {
        requester: "Ana".to_string(),
        request_type: "Bug".to_string(),
        details: "A tela de login trava ao clicar duas vezes".to_string(),
        due_date: (today() + Duration::days(1)).format("%Y-%m-%d").to_string(),
    }
}

// A valid demand is filed and the form resets.
#[tokio::test]
async fn valid_demand_is_filed_and_the_form_resets() {
    let (controller, cards, form) = wire(MockCardService::new().with_success("card-1"));

    controller.submit(ana_reports_a_bug()).await;

    let calls = cards.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "[Bug] - Ana");
    assert!(calls[0]
        .description
        .contains("A tela de login trava ao clicar duas vezes"));

    assert!(matches!(form.last_state(), FormState::Success { .. }));
    assert!(form.fields_cleared());
    assert_eq!(form.char_counter(), "0 caracteres");
}

// Short details fail locally, with no network round trip.
#[tokio::test]
async fn short_details_fail_without_a_network_round_trip() {
    let (controller, cards, form) = wire(MockCardService::new().with_success("card-1"));

    let submission = DemandSubmission {
        details: "muito curto".to_string(),
        ..ana_reports_a_bug()
    };
    controller.submit(submission).await;

    assert_eq!(cards.call_count(), 0);
    assert_eq!(
        form.last_state(),
        FormState::Failed {
            message: "Por favor, forneça mais detalhes sobre sua solicitação \
                      (mínimo 20 caracteres)."
                .to_string()
        }
    );
}

// Placeholder credentials are refused before any network call.
#[tokio::test]
async fn placeholder_credentials_fail_with_the_configuration_message() {
    let (controller, _cards, form) = wire(MockCardService::new().with_error(
        CardServiceError::configuration(
            "Configuração do Trello não encontrada. Por favor, configure o arquivo .env.",
        ),
    ));

    controller.submit(ana_reports_a_bug()).await;

    match form.last_state() {
        FormState::Failed { message } => {
            assert!(message.contains("Configuração do Trello não encontrada."));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(!form.fields_cleared());
}

// The remote error message is surfaced in the feedback.
#[tokio::test]
async fn remote_rejection_surfaces_the_remote_message() {
    let (controller, _cards, form) =
        wire(MockCardService::new().with_error(CardServiceError::api("invalid token")));

    controller.submit(ana_reports_a_bug()).await;

    match form.last_state() {
        FormState::Failed { message } => assert!(message.contains("invalid token")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

// The loading indicator is visible throughout Submitting and cleared on
// every exit path.
#[tokio::test]
async fn the_loading_indicator_never_outlives_a_submission() {
    let outcomes = [
        MockCardService::new().with_success("card-1"),
        MockCardService::new().with_error(CardServiceError::api("down")),
        MockCardService::new().with_error(CardServiceError::configuration("sem credenciais")),
    ];

    for cards in outcomes {
        let (controller, _cards, form) = wire(cards);
        controller.submit(ana_reports_a_bug()).await;

        let states = form.states();
        assert_eq!(states[0], FormState::Submitting);
        assert!(
            matches!(
                states.last(),
                Some(FormState::Success { .. }) | Some(FormState::Failed { .. })
            ),
            "submission must end in a terminal state, got {states:?}"
        );
    }

    // A validation failure also enters and leaves Submitting.
    let (controller, _cards, form) = wire(MockCardService::new());
    controller.submit(DemandSubmission::default()).await;
    let states = form.states();
    assert_eq!(states[0], FormState::Submitting);
    assert_eq!(
        states[1],
        FormState::Failed {
            message: "Por favor, preencha todos os campos obrigatórios.".to_string()
        }
    );
}

// The due-date input is validated continuously and the hint never goes
// stale.
#[tokio::test]
async fn due_date_input_is_validated_as_it_changes() {
    let (controller, _cards, form) = wire(MockCardService::new());
    controller.init();
    assert_eq!(form.min_due_date(), Some(today()));

    controller.due_date_changed("2026-08-01");
    assert_eq!(form.due_date_hint(), Some("Selecione uma data futura".to_string()));
    assert!(matches!(form.last_state(), FormState::Failed { .. }));

    controller.due_date_edited();
    assert_eq!(form.due_date_hint(), None);

    controller.due_date_changed("2026-08-09");
    assert_eq!(form.due_date_hint(), None);
    assert_eq!(form.last_state(), FormState::Idle);
}

// Repeated submissions work: the machine is back at Idle after each one.
#[tokio::test]
async fn the_form_is_ready_again_after_each_outcome() {
    let (controller, cards, form) = wire(
        MockCardService::new()
            .with_error(CardServiceError::api("down"))
            .with_success("card-2"),
    );

    controller.submit(ana_reports_a_bug()).await;
    assert!(matches!(form.last_state(), FormState::Failed { .. }));

    controller.submit(ana_reports_a_bug()).await;
    assert!(matches!(form.last_state(), FormState::Success { .. }));
    assert_eq!(cards.call_count(), 2);
}
