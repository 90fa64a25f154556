use super::{join, open_repository};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ui_state::JobDetailsUiState;
use crate::screens::{JobDetailsViewModel, SavedJobsViewModel};
use crate::ui::messages::{info, success, warning};
use crate::ui::render::jobs_table;
use std::collections::HashSet;

/// Handle `save`, `unsave` and `saved`
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let repository = open_repository(cli, cfg)?;

    match &cli.command {
        Commands::Save { id } => {
            let vm = JobDetailsViewModel::new(repository);
            join(vm.load_job_details(*id)).await?;

            let job = match vm.current_state() {
                JobDetailsUiState::Success(job) => job,
                JobDetailsUiState::Error(msg) => return Err(AppError::Screen(msg)),
                JobDetailsUiState::Loading => return Ok(()),
            };

            if *vm.is_bookmarked().borrow() {
                info(format!("Job {} is already saved.", id));
            } else {
                vm.toggle_bookmark(&job)?;
                success(format!("Saved: {} ({})", job.title, job.company_name));
            }
        }

        Commands::Unsave { id } => {
            let vm = SavedJobsViewModel::new(repository);
            match vm.current().into_iter().find(|j| j.id == *id) {
                Some(job) => {
                    vm.remove_job(&job)?;
                    success(format!("Removed: {}", job.title));
                }
                None => warning(format!("Job {} is not saved.", id)),
            }
        }

        Commands::Saved { clear } => {
            let vm = SavedJobsViewModel::new(repository);
            if *clear {
                let n = vm.clear_all()?;
                success(format!("Removed {} saved job(s).", n));
            }

            let jobs = vm.current();

            if jobs.is_empty() {
                println!("📭 No saved jobs.");
                return Ok(());
            }

            let ids: HashSet<i64> = jobs.iter().map(|j| j.id).collect();
            println!("🔖 Saved jobs ({}):\n", jobs.len());
            print!("{}", jobs_table(&jobs, &ids));
        }

        _ => {}
    }

    Ok(())
}
