pub mod colors;
pub mod formatting;
pub mod html;
pub mod table;

pub use formatting::{epoch_millis_to_local, truncate_display};
pub use html::strip_html;
