use super::preferences_api;
use crate::cli::parser::{Commands, PrefsAction};
use crate::config::Config;
use crate::db::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::alert_preferences::{AlertFrequency, JOB_TYPES};
use crate::models::ui_state::SavePreferencesState;
use crate::screens::SettingsViewModel;
use crate::ui::messages::{info, success, warning};
use crate::ui::render::alert_preferences;
use crate::utils::colors::{CYAN, RESET};

fn token_or_config(token: &Option<String>, cfg: &Config) -> Option<String> {
    token.clone().or_else(|| cfg.push_token.clone())
}

/// Handle the `prefs` command
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Prefs { action } = cmd else {
        return Ok(());
    };

    let api = preferences_api(cfg)?;

    match action {
        PrefsAction::Save {
            enable: _,
            disable,
            frequency,
            job_types,
            token,
        } => {
            let frequency = AlertFrequency::parse(frequency)?;
            for t in job_types {
                if !JOB_TYPES.iter().any(|k| k.eq_ignore_ascii_case(t)) {
                    warning(format!("'{}' is not one of the usual job types.", t));
                }
            }

            let vm = SettingsViewModel::new(api);
            vm.update_enable_alerts(!*disable);
            vm.update_alert_frequency(frequency);
            vm.update_job_types(job_types.iter().cloned().collect());

            let outcome = vm
                .save_preferences_settled(token_or_config(token, cfg))
                .await?;

            match outcome {
                SavePreferencesState::Error(msg) => return Err(AppError::Screen(msg)),
                _ => {
                    print!("{}", alert_preferences(&vm.preferences().borrow()));
                    success("Preferences saved.");
                    let store = LocalStore::open(&cfg.database)?;
                    store.log("prefs", "save", &format!("frequency={}", frequency))?;
                }
            }
        }

        PrefsAction::List { token } => {
            let token = token_or_config(token, cfg)
                .ok_or_else(|| AppError::MissingToken("run `jobfinder push token <TOKEN>`".into()))?;

            let prefs = api.get_user_preferences(&token).await?;
            if prefs.is_empty() {
                info("No preferences stored for this token.");
            }
            for p in prefs {
                println!(
                    "{CYAN}{}{RESET} alerts={} frequency={} job_types=[{}]",
                    p.preference_id.as_deref().unwrap_or("--"),
                    if p.enable_alerts { "on" } else { "off" },
                    p.alert_frequency,
                    p.job_types.join(", ")
                );
            }
        }

        PrefsAction::Delete { preference_id } => {
            api.delete_preference(preference_id).await?;
            success(format!("Preference {} deleted.", preference_id));
        }
    }

    Ok(())
}
