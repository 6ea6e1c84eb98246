//! Validation failures for a demand submission.

use thiserror::Error;

/// Why a submission was rejected before reaching the card service.
///
/// The `Display` form is for logs; [`user_message`](Self::user_message)
/// carries the feedback copy shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemandValidationError {
    /// At least one required field was left blank.
    #[error("required field missing")]
    MissingFields,

    /// The details field is below the minimum length.
    #[error("details too short: {actual} characters (minimum 20)")]
    DetailsTooShort { actual: usize },

    /// The due date is unparseable or earlier than today.
    #[error("due date is in the past")]
    DueDateInPast,
}

impl DemandValidationError {
    /// Feedback copy shown to the user, in the intake form's language.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Por favor, preencha todos os campos obrigatórios.",
            Self::DetailsTooShort { .. } => {
                "Por favor, forneça mais detalhes sobre sua solicitação (mínimo 20 caracteres)."
            }
            Self::DueDateInPast => "A data de entrega deve ser hoje ou uma data futura.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_the_form_copy() {
        assert_eq!(
            DemandValidationError::MissingFields.user_message(),
            "Por favor, preencha todos os campos obrigatórios."
        );
        assert_eq!(
            DemandValidationError::DetailsTooShort { actual: 3 }.user_message(),
            "Por favor, forneça mais detalhes sobre sua solicitação (mínimo 20 caracteres)."
        );
        assert_eq!(
            DemandValidationError::DueDateInPast.user_message(),
            "A data de entrega deve ser hoje ou uma data futura."
        );
    }
}
