pub mod debounce;
pub mod log;
pub mod paging;
pub mod repository;

pub use paging::{JobsPagingSource, Page, Pager, PagingState};
pub use repository::JobRepository;
