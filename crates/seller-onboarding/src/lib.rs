//! Seller WhatsApp onboarding.
//!
//! A seller enters their WhatsApp number and the id of their shop; the form
//! records the pair against the signed-in seller in the
//! `shop_whatsapp_mappings` table so the WhatsApp bot can route buyers to
//! them.

pub mod backend;
pub mod config;
pub mod error;
pub mod form;
pub mod outcome;
pub mod view;

pub use backend::{
    AuthState, InsertOutcome, OnboardingBackend, ReportedError, ShopWhatsappMapping,
    SHOP_WHATSAPP_MAPPINGS,
};
pub use config::Config;
pub use error::{BackendError, OnboardingError, OnboardingResult};
pub use form::{FormState, RegistrationForm};
pub use outcome::RegistrationOutcome;
pub use view::FormView;
