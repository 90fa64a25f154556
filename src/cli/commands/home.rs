use super::{join, open_repository};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ui_state::UiState;
use crate::screens::HomeViewModel;
use crate::ui::render::jobs_state;
use std::collections::HashSet;

/// Handle the `home` command: one feed load through the home screen state.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Home { refresh } = &cli.command {
        let repository = open_repository(cli, cfg)?;

        let filter = repository
            .store()
            .filter_preferences_now()
            .map(|p| p.to_filter())
            .unwrap_or_default();

        let vm = HomeViewModel::new(repository.clone());
        join(vm.load_jobs(filter.clone())).await?;
        if *refresh {
            join(vm.refresh()).await?;
        }

        let state = match vm.current_state() {
            UiState::Success(jobs) => {
                let narrowed: Vec<_> = jobs
                    .into_iter()
                    .filter(|j| filter.matches_job_type(j))
                    .collect();
                UiState::from_result(Ok(narrowed))
            }
            other => other,
        };

        if !filter.category.is_empty() || !filter.job_type.is_empty() {
            println!(
                "🔎 Filters: category='{}' job_type='{}'\n",
                filter.category, filter.job_type
            );
        }

        let saved: HashSet<i64> = repository.saved_jobs_now().iter().map(|j| j.id).collect();
        print!("{}", jobs_state(&state, &saved));
    }

    Ok(())
}
