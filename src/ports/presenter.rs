//! Presentation port - everything the user sees on the form.
//!
//! The controller never touches rendering directly; it drives this
//! interface, which a terminal adapter, a GUI toolkit, or a headless test
//! harness can implement.

use chrono::NaiveDate;

/// Visible state of the submission form.
///
/// `Submitting` disables the submit affordance and shows the loading
/// indicator; every other state clears the indicator and re-enables the
/// affordance. `Idle` also clears any feedback message, while `Failed`
/// feedback stays up until the next interaction replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Ready for input, no feedback shown.
    Idle,
    /// Submission in flight: affordance disabled, loader visible, prior
    /// feedback cleared.
    Submitting,
    /// Submission accepted by the remote service.
    Success { message: String },
    /// Submission rejected locally or remotely.
    Failed { message: String },
}

/// Port for the form's presentation state.
pub trait FormPresenter: Send + Sync {
    /// Drives the submit affordance, loading indicator, and feedback area.
    fn set_state(&self, state: FormState);

    /// Live character counter under the details field.
    fn show_char_count(&self, count: usize);

    /// Inline validation hint on the due-date input; `None` clears it.
    fn set_due_date_hint(&self, hint: Option<String>);

    /// Earliest date the due-date input should offer.
    fn set_min_due_date(&self, date: NaiveDate);

    /// Empties every input field after a successful submission.
    fn clear_form(&self);
}
