use futures::StreamExt;
use jobfinder::core::{JobRepository, JobsPagingSource, Pager};
use jobfinder::db::LocalStore;
use jobfinder::errors::AppError;
use jobfinder::models::filter::{JobFilter, RemoteQuery};

mod fakes;
use fakes::{FakeSource, job_dto, numbered_jobs};

fn repository(source: FakeSource) -> JobRepository<FakeSource> {
    JobRepository::new(source, LocalStore::in_memory().unwrap())
}

#[tokio::test]
async fn search_dispatches_on_the_first_non_empty_field() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(3)));

    let filter = JobFilter {
        search_query: String::new(),
        category: "Design".into(),
        company_name: "Acme".into(),
        job_type: String::new(),
    };
    repo.search_jobs(&filter).await.unwrap();
    repo.search_jobs(&JobFilter::query("rust")).await.unwrap();
    repo.search_jobs(&JobFilter::default()).await.unwrap();

    let source = repo_source_calls(&repo);
    assert_eq!(
        source,
        vec![
            RemoteQuery::Category("Design".into()),
            RemoteQuery::Search("rust".into()),
            RemoteQuery::All,
        ]
    );
}

fn repo_source_calls(repo: &JobRepository<FakeSource>) -> Vec<RemoteQuery> {
    repo.source().calls().into_iter().map(|(q, _)| q).collect()
}

#[tokio::test]
async fn search_forwards_the_limit_hint() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(3))).with_limit(Some(50));
    repo.search_jobs(&JobFilter::query("go")).await.unwrap();
    assert_eq!(repo.source().calls()[0].1, Some(50));
}

#[tokio::test]
async fn search_maps_dtos_into_jobs() {
    let repo = repository(FakeSource::with_jobs(vec![job_dto(7, "Rust dev")]));
    let jobs = repo.search_jobs(&JobFilter::default()).await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].salary.as_deref(), Some("Not specified"));
    assert_eq!(jobs[0].company_logo, "https://via.placeholder.com/150");
    assert_eq!(
        jobs[0].tags,
        vec!["full_time", "Software Development", "🌍 Worldwide"]
    );
}

#[tokio::test]
async fn upstream_failure_surfaces_as_api_error() {
    let repo = repository(FakeSource::failing(500));
    let err = repo.search_jobs(&JobFilter::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn saved_copy_wins_over_a_changed_remote_copy() {
    let repo = repository(FakeSource::with_jobs(vec![job_dto(1, "Old title")]));
    let job = repo.search_jobs(&JobFilter::default()).await.unwrap().remove(0);
    repo.save_job(&job).unwrap();

    repo.source().set_jobs(vec![job_dto(1, "New title")]);
    let calls_before = repo.source().call_count();

    let details = repo.get_job_details(1).await.unwrap();
    assert_eq!(details.title, "Old title");
    assert_eq!(repo.source().call_count(), calls_before);
}

#[tokio::test]
async fn details_miss_scans_the_full_listing() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(5)));

    let job = repo.get_job_details(3).await.unwrap();
    assert_eq!(job.title, "Job 3");
    assert_eq!(repo_source_calls(&repo), vec![RemoteQuery::All]);

    assert!(matches!(
        repo.get_job_details(99).await,
        Err(AppError::JobNotFound(99))
    ));
}

#[tokio::test]
async fn is_job_saved_follows_save_and_remove() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(2)));
    let job = repo.get_job_details(1).await.unwrap();

    let mut saved = Box::pin(repo.is_job_saved(1));
    assert_eq!(saved.next().await, Some(false));

    repo.save_job(&job).unwrap();
    assert_eq!(saved.next().await, Some(true));

    // saving twice is an upsert
    repo.save_job(&job).unwrap();
    assert_eq!(repo.saved_jobs_now().len(), 1);

    repo.remove_saved_job(1).unwrap();
    assert_eq!(saved.next().await, Some(false));

    // removing an unsaved job is a no-op
    repo.remove_saved_job(1).unwrap();
}

#[tokio::test]
async fn saved_jobs_are_newest_first_and_counted() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(3)));
    let jobs = repo.search_jobs(&JobFilter::default()).await.unwrap();

    let mut count = Box::pin(repo.saved_jobs_count());
    assert_eq!(count.next().await, Some(0));

    for job in &jobs {
        repo.save_job(job).unwrap();
    }
    assert_eq!(count.next().await, Some(3));

    let ids: Vec<i64> = repo.saved_jobs_now().iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![2, 1, 0]);

    let mut list = Box::pin(repo.saved_jobs());
    assert_eq!(list.next().await.map(|l| l.len()), Some(3));
}

#[tokio::test]
async fn toggle_bookmark_flips_state() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(1)));
    let job = repo.get_job_details(0).await.unwrap();

    assert!(repo.toggle_bookmark(&job).unwrap());
    assert!(repo.store().is_job_saved(0).unwrap());
    assert!(!repo.toggle_bookmark(&job).unwrap());
    assert!(!repo.store().is_job_saved(0).unwrap());
}

#[test]
fn history_keeps_the_ten_most_recent() {
    let store = LocalStore::in_memory().unwrap();
    for i in 0..12 {
        store.insert_search(&format!("q{i}")).unwrap();
    }

    let recent: Vec<String> = store
        .recent_searches_now()
        .into_iter()
        .map(|e| e.query)
        .collect();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent.first().map(String::as_str), Some("q11"));
    assert_eq!(recent.last().map(String::as_str), Some("q2"));

    store.delete_search_by_query("q11").unwrap();
    assert_eq!(store.recent_searches_now()[0].query, "q10");

    store.clear_all_searches().unwrap();
    assert!(store.recent_searches_now().is_empty());
}

#[test]
fn filter_preferences_are_a_single_row() {
    let store = LocalStore::in_memory().unwrap();
    assert!(store.filter_preferences_now().is_none());

    store.save_filter_preferences("Design", "").unwrap();
    store.save_filter_preferences("DevOps", "Contract").unwrap();

    let prefs = store.filter_preferences_now().unwrap();
    assert_eq!(prefs.category, "DevOps");
    assert_eq!(prefs.job_type, "Contract");

    store.clear_filter_preferences().unwrap();
    assert!(store.filter_preferences_now().is_none());
}

#[test]
fn store_survives_reopening() {
    let mut path = std::env::temp_dir();
    path.push("repo_reopen_jobfinder.sqlite");
    std::fs::remove_file(&path).ok();
    let path = path.to_string_lossy().to_string();

    {
        let store = LocalStore::open(&path).unwrap();
        store.insert_search("kotlin").unwrap();
        store.save_filter_preferences("Design", "Full-time").unwrap();
    }

    let store = LocalStore::open(&path).unwrap();
    assert_eq!(store.recent_searches_now()[0].query, "kotlin");
    assert_eq!(store.filter_preferences_now().unwrap().category, "Design");
}

// ---------------------------
// paging
// ---------------------------

#[tokio::test]
async fn paging_source_slices_forty_five_results() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(45)));
    let source = JobsPagingSource::new(&repo, JobFilter::default());

    let first = source.load(None, 20).await.unwrap();
    assert_eq!(first.data.first().map(|j| j.id), Some(0));
    assert_eq!(first.data.len(), 20);
    assert_eq!((first.prev_key, first.next_key), (None, Some(2)));

    let third = source.load(Some(3), 20).await.unwrap();
    assert_eq!(third.data.iter().map(|j| j.id).collect::<Vec<_>>(), (40..45).collect::<Vec<_>>());
    assert_eq!((third.prev_key, third.next_key), (Some(2), None));

    let beyond = source.load(Some(4), 20).await.unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.next_key, None);

    // one full fetch per page request
    assert_eq!(repo.source().call_count(), 3);
}

#[tokio::test]
async fn paging_source_uses_the_repository_dispatch() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(4)));
    let filter = JobFilter {
        company_name: "Acme".into(),
        ..JobFilter::default()
    };
    JobsPagingSource::new(&repo, filter).load(Some(1), 2).await.unwrap();
    assert_eq!(repo_source_calls(&repo), vec![RemoteQuery::Company("Acme".into())]);
}

#[tokio::test]
async fn pager_walks_to_the_end_and_rebuilds_the_list() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(45)));
    let source = JobsPagingSource::new(&repo, JobFilter::default());
    let mut pager = Pager::new(source, 20);

    let mut pages = 0;
    while pager.next_page().await.unwrap().is_some() {
        pages += 1;
    }

    assert_eq!(pages, 3);
    assert!(pager.is_finished());
    assert_eq!(
        pager.loaded_items().iter().map(|j| j.id).collect::<Vec<_>>(),
        (0..45).collect::<Vec<_>>()
    );

    // anchored inside page 2 → reload page 2
    pager.set_anchor(25);
    assert_eq!(pager.refresh_key(), Some(2));
    pager.set_anchor(3);
    assert_eq!(pager.refresh_key(), Some(1));
}

#[tokio::test]
async fn refresh_key_without_anchor_is_none() {
    let repo = repository(FakeSource::with_jobs(numbered_jobs(5)));
    let mut pager = Pager::new(JobsPagingSource::new(&repo, JobFilter::default()), 2);
    pager.next_page().await.unwrap();
    assert_eq!(pager.refresh_key(), None);
}
