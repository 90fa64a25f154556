use super::{Repository, join, open_repository};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ui_state::JobDetailsUiState;
use crate::notify::parse_job_deep_link;
use crate::screens::JobDetailsViewModel;
use crate::ui::render::job_details;
use std::sync::Arc;

/// Load one job through the details screen and print it.
pub async fn print_job(repository: Arc<Repository>, id: i64) -> AppResult<()> {
    let vm = JobDetailsViewModel::new(repository);
    join(vm.load_job_details(id)).await?;

    match vm.current_state() {
        JobDetailsUiState::Success(job) => {
            let saved = *vm.is_bookmarked().borrow();
            print!("{}", job_details(&job, saved));
            Ok(())
        }
        JobDetailsUiState::Error(msg) => Err(AppError::Screen(msg)),
        JobDetailsUiState::Loading => Err(AppError::Other("job details still loading".into())),
    }
}

/// Handle the `show` command
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, link } = &cli.command {
        let id = match (id, link) {
            (Some(id), _) => *id,
            (None, Some(link)) => parse_job_deep_link(link)?,
            (None, None) => return Err(AppError::Other("a job id or --link is required".into())),
        };

        print_job(open_repository(cli, cfg)?, id).await?;
    }

    Ok(())
}
