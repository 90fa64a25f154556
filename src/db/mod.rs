pub mod filters;
pub mod history;
pub mod initialize;
pub mod jobs;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;

pub use store::LocalStore;
