use super::{open_repository, preferences_api};
use crate::cli::commands::show::print_job;
use crate::cli::parser::{Cli, Commands, PushAction};
use crate::config::Config;
use crate::db::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::alert_preferences::AlertPreferences;
use crate::notify::message::CHANNEL_NAME;
use crate::notify::{PushMessage, TokenRegistrar, parse_job_deep_link};
use crate::ui::messages::{alert, info, success};
use crate::utils::colors::{CYAN, GREY, RESET};
use std::fs;

/// Handle the `push` command
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Push { action } = &cli.command else {
        return Ok(());
    };

    match action {
        PushAction::Message { file, json } => {
            let raw = match (file, json) {
                (Some(path), _) => fs::read_to_string(path)?,
                (None, Some(json)) => json.clone(),
                (None, None) => return Err(AppError::Other("either --file or --json is required".into())),
            };
            let message: PushMessage = serde_json::from_str(&raw)?;

            let Some(notification) = message.to_notification() else {
                info("Message carries nothing to show.");
                return Ok(());
            };

            alert(&notification.title, &notification.body);
            println!(
                "   {GREY}{} ({}) · id {}{RESET}",
                CHANNEL_NAME, notification.channel, notification.id
            );
            for action in &notification.actions {
                println!("   {CYAN}[{}]{RESET} {}", action.label, action.deep_link);
            }

            let store = LocalStore::open(&cfg.database)?;
            store.log(
                "push",
                &notification.job_id.map(|id| id.to_string()).unwrap_or_default(),
                &notification.title,
            )?;
        }

        PushAction::Token { token, sync } => {
            let mut updated = cfg.clone();
            updated.push_token = Some(token.clone());
            if !cli.test {
                updated.save()?;
            }
            success("Push token registered.");

            if *sync {
                let api = preferences_api(cfg)?;
                let response = TokenRegistrar::new(api.as_ref())
                    .on_new_token(token, &AlertPreferences::default())
                    .await?;
                success(format!("Token forwarded: {}", response.message));
            }
        }

        PushAction::Open { link } => {
            let id = parse_job_deep_link(link)?;
            print_job(open_repository(cli, cfg)?, id).await?;
        }
    }

    Ok(())
}
