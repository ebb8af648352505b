//! How a registration attempt ended.

/// Status text shown after a successful registration.
pub const REGISTERED_MESSAGE: &str = "Registered! We will verify shortly.";

/// Status text shown when nobody is signed in.
pub const NOT_SIGNED_IN_MESSAGE: &str = "Please sign in first";

/// Terminal result of one `register()` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The mapping was inserted.
    Registered,
    /// No authenticated user; nothing was inserted.
    NotSignedIn,
    /// The backend refused the insert with this message.
    Rejected(String),
    /// A backend call failed with this description.
    Failed(String),
}

impl RegistrationOutcome {
    /// Text the form shows for this outcome.
    pub fn status_message(&self) -> String {
        match self {
            Self::Registered => REGISTERED_MESSAGE.into(),
            Self::NotSignedIn => NOT_SIGNED_IN_MESSAGE.into(),
            Self::Rejected(message) => message.clone(),
            Self::Failed(description) => format!("Error: {}", description),
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            RegistrationOutcome::Registered.status_message(),
            "Registered! We will verify shortly."
        );
        assert_eq!(
            RegistrationOutcome::NotSignedIn.status_message(),
            "Please sign in first"
        );
        assert_eq!(
            RegistrationOutcome::Rejected("duplicate key".into()).status_message(),
            "duplicate key"
        );
        assert_eq!(
            RegistrationOutcome::Failed("network down".into()).status_message(),
            "Error: network down"
        );
    }

    #[test]
    fn test_rejected_message_is_verbatim() {
        // No prefix even when the backend message looks like an error
        let outcome = RegistrationOutcome::Rejected("Error: permission denied".into());
        assert_eq!(outcome.status_message(), "Error: permission denied");
        assert!(!outcome.is_registered());
    }
}
