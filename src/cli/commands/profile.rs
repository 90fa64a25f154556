use super::open_repository;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::screens::ProfileViewModel;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};

/// Handle the `profile` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let repository = open_repository(cli, cfg)?;
    let vm = ProfileViewModel::new(&repository);

    header(format!("jobfinder {}", env!("CARGO_PKG_VERSION")));
    println!(
        "{CYAN}Saved jobs:{RESET}      {GREEN}{}{RESET}",
        *vm.saved_jobs_count().borrow()
    );
    println!(
        "{CYAN}Recent searches:{RESET} {}",
        vm.recent_searches_count()
    );
    println!(
        "{CYAN}Push token:{RESET}      {}",
        if cfg.push_token.is_some() {
            "registered".to_string()
        } else {
            format!("{GREY}not registered{RESET}")
        }
    );

    Ok(())
}
