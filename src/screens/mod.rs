//! Screen state holders. Each one publishes its state through watch
//! channels; a new fetch overwrites the current state with no ordering
//! against fetches still in flight.

pub mod details;
pub mod home;
pub mod profile;
pub mod saved;
pub mod scope;
pub mod search;
pub mod settings;

pub use details::JobDetailsViewModel;
pub use home::HomeViewModel;
pub use profile::ProfileViewModel;
pub use saved::SavedJobsViewModel;
pub use search::SearchViewModel;
pub use settings::SettingsViewModel;
