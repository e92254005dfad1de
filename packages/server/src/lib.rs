// ConfluSum - API Core
//
// Backend for persona-tailored Confluence document summaries. Parsing and
// prompt assembly live in the summarizer crate; this crate adds the HTTP
// surface, provider wiring, and the feedback store.

pub mod config;
pub mod feedback;
pub mod sample;
pub mod server;

pub use config::Config;
