//! Supabase implementation of the onboarding backend.

use super::{AuthState, InsertOutcome, OnboardingBackend, ReportedError, ShopWhatsappMapping};
use crate::error::BackendError;
use async_trait::async_trait;
use supabase_client::{PostgrestError, SupabaseClient};

impl From<PostgrestError> for ReportedError {
    fn from(e: PostgrestError) -> Self {
        Self {
            message: e.message,
            code: e.code,
        }
    }
}

#[async_trait]
impl OnboardingBackend for SupabaseClient {
    async fn current_user(&self) -> Result<AuthState, BackendError> {
        let user = self
            .get_user()
            .await
            .map_err(|e| BackendError::Auth(e.to_string()))?;

        Ok(match user {
            Some(user) => AuthState::Authenticated { user_id: user.id },
            None => AuthState::Unauthenticated,
        })
    }

    async fn insert_records(
        &self,
        collection: &str,
        records: &[ShopWhatsappMapping],
    ) -> Result<InsertOutcome, BackendError> {
        let refused = self
            .insert(collection, records)
            .await
            .map_err(|e| BackendError::Storage(e.to_string()))?;

        Ok(match refused {
            None => InsertOutcome::Inserted,
            Some(error) => InsertOutcome::Rejected(error.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_error_keeps_postgrest_code() {
        let refused = PostgrestError {
            message: "duplicate key".into(),
            code: Some("23505".into()),
            details: Some("Key (shop_id)=(shop1) already exists.".into()),
            hint: None,
        };

        let reported = ReportedError::from(refused);
        assert_eq!(reported.message, "duplicate key");
        assert_eq!(reported.code.as_deref(), Some("23505"));
    }

    #[test]
    fn test_reported_error_without_code() {
        let reported = ReportedError::from(PostgrestError::from_message("Forbidden"));
        assert_eq!(reported, ReportedError::new("Forbidden"));
    }
}
