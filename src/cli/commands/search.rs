use super::open_repository;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{JobsPagingSource, Page, Pager};
use crate::errors::AppResult;
use crate::models::filter::JobFilter;
use crate::models::job::Job;
use crate::ui::messages::{info, success};
use crate::ui::render::jobs_table;
use crate::utils::colors::{GREY, RESET};
use std::collections::HashSet;

fn key_label(key: Option<u32>) -> String {
    key.map(|k| k.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"))
}

fn print_page(number: u32, page: &Page<Job>, filter: &JobFilter, saved: &HashSet<i64>) {
    let visible: Vec<Job> = page
        .data
        .iter()
        .filter(|j| filter.matches_job_type(j))
        .cloned()
        .collect();

    println!("📄 Page {} ({} jobs)\n", number, visible.len());
    print!("{}", jobs_table(&visible, saved));
    println!(
        "\n   prev: {}  next: {}\n",
        key_label(page.prev_key),
        key_label(page.next_key)
    );
}

/// Handle the `search` command
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        query,
        category,
        company,
        job_type,
        page,
        page_size,
        all,
        save_filters,
    } = &cli.command
    {
        let repository = open_repository(cli, cfg)?;
        let store = repository.store();

        let filter = JobFilter {
            search_query: query.clone().unwrap_or_default().trim().to_string(),
            category: category.clone().unwrap_or_default(),
            company_name: company.clone().unwrap_or_default(),
            job_type: job_type.clone().unwrap_or_default(),
        };

        if *save_filters {
            store.save_filter_preferences(&filter.category, &filter.job_type)?;
            success("Filter preferences saved.");
        }

        if !filter.search_query.is_empty() {
            store.insert_search(&filter.search_query)?;
            store.log("search", &filter.search_query, "Search recorded")?;
        }

        let saved: HashSet<i64> = repository.saved_jobs_now().iter().map(|j| j.id).collect();
        let size = page_size.unwrap_or(cfg.page_size);
        let first = if *all { 1 } else { *page };

        let source = JobsPagingSource::new(&*repository, filter.clone());
        let mut pager = Pager::starting_at(source, size, first);

        let mut number = first;
        let mut shown = 0;
        while let Some(p) = pager.next_page().await? {
            print_page(number, p, &filter, &saved);
            shown += 1;
            number += 1;
            if !*all {
                break;
            }
        }

        if shown == 0 {
            if first > 1 {
                info(format!("No jobs on page {}.", first));
            } else {
                println!("📭 No jobs found.");
            }
        } else if *all {
            info(format!(
                "{} jobs across {} page(s).",
                pager.state().item_count(),
                shown
            ));
        }
    }

    Ok(())
}
