use super::open_repository;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::screens::SearchViewModel;
use crate::ui::messages::{success, warning};
use crate::ui::render::history_table;

/// Handle the `history` command
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        delete,
        delete_query,
        clear,
    } = &cli.command
    {
        let repository = open_repository(cli, cfg)?;
        let vm = SearchViewModel::new(repository, cfg.search_debounce());
        let recent = vm.recent_searches();

        if let Some(id) = delete {
            let entry = recent.borrow().iter().find(|e| e.id == *id).cloned();
            match entry {
                Some(entry) => {
                    vm.delete_search_history(&entry)?;
                    success(format!("Removed '{}' from history.", entry.query));
                }
                None => warning(format!("No recent search with id {}.", id)),
            }
        }

        if let Some(query) = delete_query {
            vm.delete_search_by_query(query)?;
            success(format!("Removed every '{}' search.", query));
        }

        if *clear {
            vm.clear_search_history()?;
            success("Search history cleared.");
        }

        let entries = recent.borrow().clone();
        if entries.is_empty() {
            println!("📭 No recent searches.");
        } else {
            println!("🕘 Recent searches:\n");
            print!("{}", history_table(&entries));
        }
    }

    Ok(())
}
