use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod migrate; // use submodule at src/config/migrate.rs

pub const DEFAULT_JOBS_API_URL: &str = "https://remotive.com/api";
pub const DEFAULT_PREFERENCES_API_URL: &str =
    "https://dy4ijz0f53.execute-api.ap-south-1.amazonaws.com/dev";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_jobs_api_url")]
    pub jobs_api_url: String,
    #[serde(default = "default_preferences_api_url")]
    pub preferences_api_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u64,
    /// Optional `limit` hint forwarded to the jobs endpoint on searches.
    #[serde(default)]
    pub result_limit: Option<u32>,
    /// Device push token; also used as the user id on the preferences endpoint.
    #[serde(default)]
    pub push_token: Option<String>,
}

fn default_jobs_api_url() -> String {
    DEFAULT_JOBS_API_URL.to_string()
}
fn default_preferences_api_url() -> String {
    DEFAULT_PREFERENCES_API_URL.to_string()
}
fn default_page_size() -> usize {
    20
}
fn default_request_timeout() -> u64 {
    30
}
fn default_search_debounce() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            jobs_api_url: default_jobs_api_url(),
            preferences_api_url: default_preferences_api_url(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout(),
            search_debounce_ms: default_search_debounce(),
            result_limit: None,
            push_token: None,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobfinder")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".jobfinder")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobfinder.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("jobfinder.sqlite")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that ended up in the configuration.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("jobfinder.sqlite"),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let mut config = Self::load().unwrap_or_default();
            config.database = db_path.to_string_lossy().to_string();
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
