//! Submission lifecycle phases.

use super::state_machine::StateMachine;

/// Lifecycle of a single form submission.
///
/// Success and Failed hand back to Idle as soon as the presenter has been
/// notified; the machine never rests in Submitting, so the loading
/// indicator cannot survive a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Ready for the next submission.
    #[default]
    Idle,
    /// Validation and the network call are in progress.
    Submitting,
    /// The card was filed.
    Success,
    /// Validation or the card service rejected the attempt.
    Failed,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, Submitting)
                | (Submitting, Success)
                | (Submitting, Failed)
                | (Success, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![Submitting],
            Submitting => vec![Success, Failed],
            Success => vec![Idle],
            Failed => vec![Idle],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(SubmissionPhase::default(), SubmissionPhase::Idle);
    }

    #[test]
    fn only_idle_accepts_a_new_submission() {
        assert!(SubmissionPhase::Idle.can_transition_to(&SubmissionPhase::Submitting));
        assert!(!SubmissionPhase::Submitting.can_transition_to(&SubmissionPhase::Submitting));
        assert!(!SubmissionPhase::Success.can_transition_to(&SubmissionPhase::Submitting));
        assert!(!SubmissionPhase::Failed.can_transition_to(&SubmissionPhase::Submitting));
    }

    #[test]
    fn submitting_reaches_both_terminal_phases() {
        assert_eq!(
            SubmissionPhase::Submitting.valid_transitions(),
            vec![SubmissionPhase::Success, SubmissionPhase::Failed]
        );
    }

    #[test]
    fn terminal_phases_return_to_idle_only() {
        assert_eq!(
            SubmissionPhase::Success.valid_transitions(),
            vec![SubmissionPhase::Idle]
        );
        assert_eq!(
            SubmissionPhase::Failed.valid_transitions(),
            vec![SubmissionPhase::Idle]
        );
    }

    #[test]
    fn cannot_skip_submitting() {
        assert!(SubmissionPhase::Idle
            .transition_to(SubmissionPhase::Success)
            .is_err());
        assert!(SubmissionPhase::Idle
            .transition_to(SubmissionPhase::Failed)
            .is_err());
    }
}
