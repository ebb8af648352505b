//! The external collaborator the form talks to.

mod supabase;

use crate::error::BackendError;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Table that stores phone-to-shop mappings.
pub const SHOP_WHATSAPP_MAPPINGS: &str = "shop_whatsapp_mappings";

/// Who is behind the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated { user_id: String },
    Unauthenticated,
}

/// A row of `shop_whatsapp_mappings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopWhatsappMapping {
    pub shop_id: String,
    pub seller_user_id: String,
    pub whatsapp_phone: String,
}

/// Error reported by the backend for an insert it refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub message: String,
    pub code: Option<String>,
}

impl ReportedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }
}

/// Result of an insert call that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Rejected(ReportedError),
}

/// Authentication lookup and record insertion.
#[async_trait]
pub trait OnboardingBackend: Send + Sync {
    /// Resolve the user owning the current session.
    async fn current_user(&self) -> Result<AuthState, BackendError>;

    /// Insert records into a named collection.
    async fn insert_records(
        &self,
        collection: &str,
        records: &[ShopWhatsappMapping],
    ) -> Result<InsertOutcome, BackendError>;
}

#[async_trait]
impl<B: OnboardingBackend + ?Sized> OnboardingBackend for Arc<B> {
    async fn current_user(&self) -> Result<AuthState, BackendError> {
        (**self).current_user().await
    }

    async fn insert_records(
        &self,
        collection: &str,
        records: &[ShopWhatsappMapping],
    ) -> Result<InsertOutcome, BackendError> {
        (**self).insert_records(collection, records).await
    }
}
