//! Common test utilities for integration tests.

use seller_onboarding::RegistrationForm;
use std::time::Duration;
use supabase_client::SupabaseClient;
use wiremock::MockServer;

/// Create a Supabase client configured for a mock server.
pub fn test_supabase_client(mock_server: &MockServer, access_token: Option<&str>) -> SupabaseClient {
    SupabaseClient::new(
        mock_server.uri(),
        "test-anon-key",
        access_token.map(String::from),
        Duration::from_secs(5),
    )
    .unwrap()
}

/// Form bound to the mock server with the fields already typed in.
pub fn filled_form(
    mock_server: &MockServer,
    access_token: Option<&str>,
    phone: &str,
    shop_id: &str,
) -> RegistrationForm<SupabaseClient> {
    let form = RegistrationForm::new(test_supabase_client(mock_server, access_token));
    form.set_phone(phone);
    form.set_shop_id(shop_id);
    form
}
