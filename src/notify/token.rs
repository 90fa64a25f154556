use crate::errors::{AppError, AppResult};
use crate::models::alert_preferences::AlertPreferences;
use crate::remote::PreferencesGateway;
use crate::remote::dto::PreferenceResponseDto;
use crate::remote::mapper::preference_request;

/// Forwards device push tokens to the preferences endpoint.
pub struct TokenRegistrar<'a, P> {
    gateway: &'a P,
}

impl<'a, P: PreferencesGateway> TokenRegistrar<'a, P> {
    pub fn new(gateway: &'a P) -> Self {
        Self { gateway }
    }

    /// Called on first registration and on every token refresh.
    pub async fn on_new_token(
        &self,
        token: &str,
        prefs: &AlertPreferences,
    ) -> AppResult<PreferenceResponseDto> {
        if token.trim().is_empty() {
            return Err(AppError::MissingToken("empty token".into()));
        }

        tracing::info!("forwarding refreshed push token");
        self.gateway
            .save_preference(&preference_request(token, prefs))
            .await
    }
}
