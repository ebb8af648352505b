//! Error types for seller onboarding.

use thiserror::Error;

/// Failure raised by a backend call, as opposed to an error the backend
/// reports as the result of a completed call.
///
/// The display text is the bare description; the form prefixes it when
/// showing it to the seller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Storage(String),
}

/// Application error type for the command-line entry point.
#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Supabase error: {0}")]
    Supabase(#[from] supabase_client::SupabaseError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] tokio::task::JoinError),
}

/// Result type alias for application errors.
pub type OnboardingResult<T> = Result<T, OnboardingError>;
