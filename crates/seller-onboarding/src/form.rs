//! The seller registration form.
//!
//! A form holds the two text fields, a submitting flag and a status line.
//! `register()` looks up the signed-in seller and inserts one
//! `shop_whatsapp_mappings` row; every way that can end is folded into the
//! status line, nothing is returned to the caller.

use crate::backend::{
    AuthState, InsertOutcome, OnboardingBackend, ShopWhatsappMapping, SHOP_WHATSAPP_MAPPINGS,
};
use crate::error::BackendError;
use crate::outcome::RegistrationOutcome;
use crate::view::FormView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Observable state of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub phone: String,
    pub shop_id: String,
    pub is_submitting: bool,
    /// Empty until a submission finishes; cleared when the next one starts.
    pub status_message: String,
    /// Outcome behind `status_message`.
    pub outcome: Option<RegistrationOutcome>,
}

impl FormState {
    /// Whether the last submission inserted the mapping.
    pub fn is_registered(&self) -> bool {
        self.outcome.as_ref().is_some_and(|o| o.is_registered())
    }

    /// Process exit code for the command-line entry point.
    pub fn exit_code(&self) -> i32 {
        if self.is_registered() {
            0
        } else {
            1
        }
    }
}

struct Inner<B> {
    backend: B,
    state: watch::Sender<FormState>,
    in_flight: AtomicBool,
}

/// Registration form bound to a backend.
///
/// Dropping the form cancels a submission that is still waiting on the
/// backend; its result is then discarded.
pub struct RegistrationForm<B> {
    inner: Arc<Inner<B>>,
    cancel: CancellationToken,
}

impl<B: OnboardingBackend + 'static> RegistrationForm<B> {
    /// Create an idle form with empty fields.
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(FormState::default());

        Self {
            inner: Arc::new(Inner {
                backend,
                state,
                in_flight: AtomicBool::new(false),
            }),
            cancel: CancellationToken::new(),
        }
    }

    pub fn set_phone(&self, phone: impl Into<String>) {
        let phone = phone.into();
        self.inner.state.send_modify(|s| s.phone = phone);
    }

    pub fn set_shop_id(&self, shop_id: impl Into<String>) {
        let shop_id = shop_id.into();
        self.inner.state.send_modify(|s| s.shop_id = shop_id);
    }

    /// Current state.
    pub fn snapshot(&self) -> FormState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that sees every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.inner.state.subscribe()
    }

    /// Render model for the current state.
    pub fn render(&self) -> FormView {
        FormView::from(&*self.inner.state.borrow())
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.state.borrow().is_submitting
    }

    /// Submit the form and wait for the outcome.
    ///
    /// A call made while another submission is in flight does nothing.
    pub async fn register(&self) {
        run_registration(self.inner.clone(), self.cancel.clone()).await
    }

    /// Press the trigger: run `register()` in the background.
    pub fn submit(&self) -> JoinHandle<()> {
        tokio::spawn(run_registration(self.inner.clone(), self.cancel.clone()))
    }
}

impl<B> Drop for RegistrationForm<B> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_registration<B: OnboardingBackend>(inner: Arc<Inner<B>>, cancel: CancellationToken) {
    if cancel.is_cancelled() {
        return;
    }

    if inner
        .in_flight
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        debug!("Registration already in flight, ignoring trigger");
        return;
    }

    let mut fields = (String::new(), String::new());
    inner.state.send_modify(|s| {
        s.is_submitting = true;
        s.status_message.clear();
        s.outcome = None;
        fields = (s.phone.clone(), s.shop_id.clone());
    });
    let (phone, shop_id) = fields;

    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("Form disposed during registration, dropping result");
            inner.in_flight.store(false, Ordering::Release);
            return;
        }
        result = attempt(&inner.backend, &phone, &shop_id) => {
            result.unwrap_or_else(|e| RegistrationOutcome::Failed(e.to_string()))
        }
    };

    if cancel.is_cancelled() {
        inner.in_flight.store(false, Ordering::Release);
        return;
    }

    match &outcome {
        RegistrationOutcome::Registered => {
            info!(shop_id = %shop_id, phone = %redact_phone(&phone), "Seller mapping registered")
        }
        RegistrationOutcome::NotSignedIn => warn!("Registration attempted without a session"),
        RegistrationOutcome::Rejected(message) => {
            warn!(shop_id = %shop_id, "Registration refused: {}", message)
        }
        RegistrationOutcome::Failed(description) => {
            warn!(shop_id = %shop_id, "Registration failed: {}", description)
        }
    }

    let status_message = outcome.status_message();
    inner.state.send_modify(|s| {
        s.status_message = status_message;
        s.outcome = Some(outcome);
        s.is_submitting = false;
    });
    inner.in_flight.store(false, Ordering::Release);
}

/// Look up the seller and insert the mapping. Inputs are forwarded verbatim.
#[instrument(skip(backend, phone))]
async fn attempt<B: OnboardingBackend>(
    backend: &B,
    phone: &str,
    shop_id: &str,
) -> Result<RegistrationOutcome, BackendError> {
    let seller_user_id = match backend.current_user().await? {
        AuthState::Authenticated { user_id } => user_id,
        AuthState::Unauthenticated => return Ok(RegistrationOutcome::NotSignedIn),
    };

    let record = ShopWhatsappMapping {
        shop_id: shop_id.to_string(),
        seller_user_id,
        whatsapp_phone: phone.to_string(),
    };

    let outcome = backend
        .insert_records(SHOP_WHATSAPP_MAPPINGS, std::slice::from_ref(&record))
        .await?;

    Ok(match outcome {
        InsertOutcome::Inserted => RegistrationOutcome::Registered,
        InsertOutcome::Rejected(error) => {
            warn!(
                shop_id = %shop_id,
                code = error.code.as_deref().unwrap_or("none"),
                "Backend refused mapping insert"
            );
            RegistrationOutcome::Rejected(error.message)
        }
    })
}

/// Keep only the last four characters of a phone number for logging.
fn redact_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let visible = chars.len().min(4);
    let tail: String = chars[chars.len() - visible..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - visible), tail)
}
