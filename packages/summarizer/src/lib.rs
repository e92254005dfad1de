//! Document structure parsing and persona-tailored prompt assembly
//!
//! Takes raw Confluence storage markup, strips it down to readable text,
//! segments it into an outline of headed sections, and assembles a Korean
//! summarization prompt tailored to a reader persona. Provider adapters for
//! Anthropic and Confluence live behind the `anthropic` and `confluence`
//! features; the core pipeline has no network dependencies.
//!
//! # Example
//!
//! ```rust,ignore
//! use summarizer::{outline, prompts, Persona};
//!
//! let outline = outline::segment(&summarizer::normalize::normalize_lines(&raw_markup));
//! let flat = summarizer::normalize::normalize(&raw_markup);
//! let prompt = prompts::assemble_for(Persona::Developer, &title, &flat, Some(&outline));
//! ```

pub mod error;
pub mod normalize;
pub mod offline;
pub mod outline;
pub mod personas;
pub mod prompts;
pub mod testing;
pub mod traits;

#[cfg(feature = "anthropic")]
pub mod ai;

#[cfg(feature = "confluence")]
pub mod sources;

pub use error::{SourceError, SummarizeError, UnknownPersonaError};
pub use offline::offline_summary;
pub use outline::{Outline, WHOLE_CONTENT_SECTION};
pub use personas::{Persona, PersonaProfile};
pub use traits::{Document, DocumentSource, Summarizer};

#[cfg(feature = "anthropic")]
pub use ai::AnthropicSummarizer;

#[cfg(feature = "confluence")]
pub use sources::ConfluenceSource;
