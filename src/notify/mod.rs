//! Job-alert push handling: turning inbound messages into local
//! notifications, deep links back into job details, and forwarding device
//! tokens to the preferences endpoint.

pub mod deep_link;
pub mod message;
pub mod token;

pub use deep_link::{job_deep_link, parse_job_deep_link};
pub use message::{JobNotification, NotificationAction, PushMessage};
pub use token::TokenRegistrar;
