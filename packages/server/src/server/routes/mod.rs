// API route handlers
pub mod feedback;
pub mod health;
pub mod stats;
pub mod summarize;
pub mod validate;

pub use feedback::feedback_handler;
pub use health::health_handler;
pub use stats::stats_handler;
pub use summarize::summarize_handler;
pub use validate::validate_url_handler;
