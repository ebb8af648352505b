//! Supabase HTTP client.

use crate::error::SupabaseError;
use crate::types::*;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the Supabase auth (GoTrue) and REST (PostgREST) endpoints.
///
/// The project key and the optional user session token are stored using
/// `SecretString` to prevent accidental exposure in logs or debug output.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
    access_token: Option<SecretString>,
}

impl SupabaseClient {
    /// Create a new Supabase client.
    ///
    /// `access_token` is the signed-in user's session JWT. Without it every
    /// call runs as the anonymous role and `get_user` reports no user.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SupabaseError> {
        let client = Client::builder().timeout(timeout).build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key.into()),
            access_token: access_token.map(SecretString::new),
        })
    }

    /// Base URL of the project.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a user session token is configured.
    pub fn has_session(&self) -> bool {
        self.access_token.is_some()
    }

    /// Fetch the user owning the configured session.
    ///
    /// Returns `Ok(None)` when there is no session or the auth server rejects
    /// it as missing or expired.
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> Result<Option<User>, SupabaseError> {
        let Some(token) = &self.access_token else {
            debug!("No session token configured");
            return Ok(None);
        };

        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", self.api_key.expose_secret())
            .header("Authorization", format!("Bearer {}", token.expose_secret()))
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(status = %status, "Session rejected by auth server");
                Ok(None)
            }
            s if s.is_success() => {
                let body = response.text().await?;
                let user: User = serde_json::from_str(&body)?;
                debug!(user_id = %user.id, "Resolved current user");
                Ok(Some(user))
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into());
                Err(SupabaseError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Insert rows into a table.
    ///
    /// A refusal from PostgREST (constraint violation, row level security,
    /// bad column) is returned as `Ok(Some(error))`. `Err` is reserved for
    /// failures to talk to the server at all.
    #[instrument(skip(self, rows), fields(row_count = rows.len()))]
    pub async fn insert<T: Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
    ) -> Result<Option<PostgrestError>, SupabaseError> {
        let response = self
            .authorized(self.client.post(format!("{}/rest/v1/{}", self.base_url, table)))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "Insert accepted");
            return Ok(None);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Insert refused");

        let error = serde_json::from_str::<PostgrestError>(&body).unwrap_or_else(|_| {
            if body.trim().is_empty() {
                PostgrestError::from_message(
                    status.canonical_reason().unwrap_or("Request failed"),
                )
            } else {
                PostgrestError::from_message(body)
            }
        });

        Ok(Some(error))
    }

    /// Health check - returns true if the auth server is reachable.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/auth/v1/health", self.base_url))
            .header("apikey", self.api_key.expose_secret())
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Attach the project key and the best available bearer token.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .access_token
            .as_ref()
            .unwrap_or(&self.api_key)
            .expose_secret();

        request
            .header("apikey", self.api_key.expose_secret())
            .header("Authorization", format!("Bearer {}", bearer))
    }
}
