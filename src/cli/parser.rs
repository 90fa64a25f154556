use clap::{Parser, Subcommand};

/// Command-line interface definition for jobfinder
/// CLI application to browse and bookmark remote jobs with SQLite
#[derive(Parser)]
#[command(
    name = "jobfinder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse, search and bookmark remote-job listings from the Remotive API",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Read job listings from a JSON file instead of the jobs API
    #[arg(global = true, long = "fixture", value_name = "FILE", hide = true)]
    pub fixture: Option<String>,

    /// Debug-level diagnostics on stderr (JOBFINDER_LOG overrides)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Home feed, narrowed by the saved filter preferences
    Home {
        #[arg(long = "refresh", help = "Load the feed twice, the second time via refresh")]
        refresh: bool,
    },

    /// Search jobs one page at a time
    Search {
        /// Free-text query (wins over every other criterion)
        query: Option<String>,

        #[arg(long, help = "Filter by category (ignored when a query is given)")]
        category: Option<String>,

        #[arg(long, help = "Filter by company (used only without query and category)")]
        company: Option<String>,

        #[arg(long = "job-type", help = "Keep only jobs of this type (applied locally)")]
        job_type: Option<String>,

        #[arg(long, short, default_value_t = 1, help = "Page number, starting at 1")]
        page: u32,

        #[arg(long = "page-size", help = "Jobs per page (default from config)")]
        page_size: Option<usize>,

        #[arg(long, conflicts_with = "page", help = "Walk every page until the end")]
        all: bool,

        #[arg(long = "save-filters", help = "Remember --category/--job-type as filter preferences")]
        save_filters: bool,
    },

    /// Show one job (saved copy first, remote listing otherwise)
    Show {
        /// Job id
        #[arg(required_unless_present = "link")]
        id: Option<i64>,

        #[arg(long, conflicts_with = "id", help = "Open a jobfinder://job/<id> deep link")]
        link: Option<String>,
    },

    /// Bookmark a job
    Save { id: i64 },

    /// Remove a bookmark
    Unsave { id: i64 },

    /// List bookmarked jobs, newest first
    Saved {
        #[arg(long, help = "Remove every bookmark")]
        clear: bool,
    },

    /// Recent searches
    History {
        #[arg(long, value_name = "ID", help = "Delete one history entry by id")]
        delete: Option<i64>,

        #[arg(long = "delete-query", value_name = "QUERY", help = "Delete every entry with this text")]
        delete_query: Option<String>,

        #[arg(long, help = "Clear the whole history")]
        clear: bool,
    },

    /// Show or change the saved filter preferences
    Filters {
        #[arg(long)]
        category: Option<String>,

        #[arg(long = "job-type")]
        job_type: Option<String>,

        #[arg(long, conflicts_with_all = ["category", "job_type"])]
        clear: bool,
    },

    /// Job-alert preferences kept on the preferences endpoint
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Push-notification helpers
    Push {
        #[command(subcommand)]
        action: PushAction,
    },

    /// Saved-jobs count and account summary
    Profile,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Send alert preferences
    Save {
        #[arg(long, conflicts_with = "disable", help = "Turn job alerts on")]
        enable: bool,

        #[arg(long, help = "Turn job alerts off")]
        disable: bool,

        #[arg(long, default_value = "Daily", help = "Daily or Weekly")]
        frequency: String,

        #[arg(long = "job-type", help = "Job type to be alerted about (repeatable)")]
        job_types: Vec<String>,

        #[arg(long, help = "Push token (default: the one in the configuration)")]
        token: Option<String>,
    },

    /// List preferences stored for the registered token
    List {
        #[arg(long)]
        token: Option<String>,
    },

    /// Delete a stored preference
    Delete { preference_id: String },
}

#[derive(Subcommand)]
pub enum PushAction {
    /// Render an incoming push message as a notification
    Message {
        #[arg(long, value_name = "FILE", conflicts_with = "json")]
        file: Option<String>,

        #[arg(long, value_name = "JSON")]
        json: Option<String>,
    },

    /// Register a (new) device push token
    Token {
        token: String,

        #[arg(long, help = "Also forward the token to the preferences endpoint")]
        sync: bool,
    },

    /// Open a notification deep link
    Open { link: String },
}
