//! Render model for the onboarding form.

use crate::form::FormState;
use std::fmt;

pub const HEADING: &str = "Seller WhatsApp onboarding";
pub const PHONE_PLACEHOLDER: &str = "+9198...";
pub const SHOP_ID_PLACEHOLDER: &str = "Shop / marketplace id";
pub const REGISTER_LABEL: &str = "Register";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

/// What a renderer draws for a given form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub phone: InputView,
    pub shop_id: InputView,
    pub trigger: ButtonView,
    /// Present exactly when there is a non-empty status message.
    pub status: Option<String>,
}

impl From<&FormState> for FormView {
    fn from(state: &FormState) -> Self {
        Self {
            heading: HEADING,
            phone: InputView {
                value: state.phone.clone(),
                placeholder: PHONE_PLACEHOLDER,
            },
            shop_id: InputView {
                value: state.shop_id.clone(),
                placeholder: SHOP_ID_PLACEHOLDER,
            },
            trigger: ButtonView {
                label: REGISTER_LABEL,
                enabled: !state.is_submitting,
            },
            status: (!state.status_message.is_empty()).then(|| state.status_message.clone()),
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for input in [&self.phone, &self.shop_id] {
            if input.value.is_empty() {
                writeln!(f, "  [ {} ]", input.placeholder)?;
            } else {
                writeln!(f, "  [ {} ]", input.value)?;
            }
        }
        if self.trigger.enabled {
            writeln!(f, "  < {} >", self.trigger.label)?;
        } else {
            writeln!(f, "  < {} > (disabled)", self.trigger.label)?;
        }
        if let Some(status) = &self.status {
            writeln!(f, "  {}", status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_view() {
        let view = FormView::from(&FormState::default());

        assert!(view.trigger.enabled);
        assert!(view.status.is_none());
        assert_eq!(view.phone.placeholder, "+9198...");
        assert_eq!(
            view.to_string(),
            "Seller WhatsApp onboarding\n  [ +9198... ]\n  [ Shop / marketplace id ]\n  < Register >\n"
        );
    }

    #[test]
    fn test_submitting_view_disables_trigger() {
        let state = FormState {
            phone: "+919800000000".into(),
            shop_id: "shop1".into(),
            is_submitting: true,
            ..FormState::default()
        };
        let view = FormView::from(&state);

        assert!(!view.trigger.enabled);
        assert!(view.status.is_none());
        assert!(view.to_string().contains("< Register > (disabled)"));
        assert!(view.to_string().contains("[ +919800000000 ]"));
    }

    #[test]
    fn test_status_shown_when_non_empty() {
        let state = FormState {
            status_message: "duplicate key".into(),
            ..FormState::default()
        };
        let view = FormView::from(&state);

        assert_eq!(view.status.as_deref(), Some("duplicate key"));
        assert!(view.to_string().ends_with("  duplicate key\n"));
    }
}
