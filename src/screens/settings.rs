use super::scope::ViewModelScope;
use crate::errors::{AppError, AppResult};
use crate::models::alert_preferences::{AlertFrequency, AlertPreferences};
use crate::models::ui_state::SavePreferencesState;
use crate::remote::PreferencesGateway;
use crate::remote::mapper::preference_request;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long `Success` stays visible before falling back to `Idle`.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(2);

pub struct SettingsViewModel<P> {
    gateway: Arc<P>,
    preferences: watch::Sender<AlertPreferences>,
    save_state: Arc<watch::Sender<SavePreferencesState>>,
    scope: ViewModelScope,
}

impl<P: PreferencesGateway + 'static> SettingsViewModel<P> {
    pub fn new(gateway: Arc<P>) -> Self {
        Self::with_preferences(gateway, AlertPreferences::default())
    }

    pub fn with_preferences(gateway: Arc<P>, initial: AlertPreferences) -> Self {
        Self {
            gateway,
            preferences: watch::Sender::new(initial),
            save_state: Arc::new(watch::Sender::new(SavePreferencesState::Idle)),
            scope: ViewModelScope::new(),
        }
    }

    pub fn preferences(&self) -> watch::Receiver<AlertPreferences> {
        self.preferences.subscribe()
    }

    pub fn save_state(&self) -> watch::Receiver<SavePreferencesState> {
        self.save_state.subscribe()
    }

    pub fn update_enable_alerts(&self, enabled: bool) {
        self.preferences.send_modify(|p| p.enable_alerts = enabled);
    }

    pub fn update_alert_frequency(&self, frequency: AlertFrequency) {
        self.preferences.send_modify(|p| p.alert_frequency = frequency);
    }

    pub fn update_job_types(&self, job_types: BTreeSet<String>) {
        self.preferences.send_modify(|p| p.job_types = job_types);
    }

    /// Push the current preferences, keyed by `push_token`.
    pub fn save_preferences(&self, push_token: Option<String>) -> JoinHandle<()> {
        self.save_state.send_replace(SavePreferencesState::Loading);

        let gateway = self.gateway.clone();
        let save_state = self.save_state.clone();
        let prefs = self.preferences.borrow().clone();

        self.scope.launch(async move {
            let Some(token) = push_token.filter(|t| !t.is_empty()) else {
                save_state.send_replace(SavePreferencesState::Error(
                    "No push token registered".to_string(),
                ));
                return;
            };

            let request = preference_request(&token, &prefs);
            match gateway.save_preference(&request).await {
                Ok(response) => {
                    tracing::info!(preference_id = ?response.preference_id, "preferences saved");
                    save_state.send_replace(SavePreferencesState::Success);
                    tokio::time::sleep(SUCCESS_RESET_DELAY).await;
                    save_state.send_if_modified(|s| {
                        if *s == SavePreferencesState::Success {
                            *s = SavePreferencesState::Idle;
                            true
                        } else {
                            false
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "saving preferences failed");
                    save_state.send_replace(SavePreferencesState::Error(format!(
                        "Failed to save: {}",
                        e
                    )));
                }
            }
        })
    }

    /// Save and wait until the attempt has settled on `Success` or `Error`.
    /// A save task that dies before publishing an outcome is reported
    /// instead of waited on.
    pub async fn save_preferences_settled(
        &self,
        push_token: Option<String>,
    ) -> AppResult<SavePreferencesState> {
        let mut state = self.save_state();
        let task = self.save_preferences(push_token);

        tokio::select! {
            settled = state.wait_for(|s| *s != SavePreferencesState::Loading) => {
                settled
                    .map(|s| (*s).clone())
                    .map_err(|e| AppError::Other(e.to_string()))
            }
            joined = task => {
                joined.map_err(|e| AppError::Other(format!("background task failed: {e}")))?;
                Ok(self.save_state.borrow().clone())
            }
        }
    }
}
