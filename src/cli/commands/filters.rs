use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LocalStore;
use crate::errors::AppResult;
use crate::models::alert_preferences::{CATEGORIES, JOB_TYPES};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::epoch_millis_to_local;

/// Handle the `filters` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filters {
        category,
        job_type,
        clear,
    } = cmd
    {
        let store = LocalStore::open(&cfg.database)?;

        if *clear {
            store.clear_filter_preferences()?;
            store.log("filters", "clear", "Filter preferences cleared")?;
            success("Filter preferences cleared.");
        } else if category.is_some() || job_type.is_some() {
            // unspecified fields keep their stored value
            let current = store.filter_preferences_now().unwrap_or_default();
            let category = category.clone().unwrap_or(current.category);
            let job_type = job_type.clone().unwrap_or(current.job_type);

            if !category.is_empty() && !CATEGORIES.contains(&category.as_str()) {
                warning(format!("'{}' is not one of the usual categories.", category));
            }
            if !job_type.is_empty() && !JOB_TYPES.iter().any(|t| t.eq_ignore_ascii_case(&job_type)) {
                warning(format!("'{}' is not one of the usual job types.", job_type));
            }

            store.save_filter_preferences(&category, &job_type)?;
            success("Filter preferences saved.");
        }

        match store.filter_preferences_now() {
            Some(p) => {
                let show = |v: &str| {
                    if v.is_empty() {
                        format!("{GREY}any{RESET}")
                    } else {
                        v.to_string()
                    }
                };
                println!("{CYAN}Category:{RESET} {}", show(&p.category));
                println!("{CYAN}Job type:{RESET} {}", show(&p.job_type));
                println!(
                    "{CYAN}Updated:{RESET}  {}",
                    epoch_millis_to_local(p.last_updated)
                );
            }
            None => info("No filter preferences saved."),
        }
    }

    Ok(())
}
