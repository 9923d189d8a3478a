//! Google Gemini integration for Pagesmith
//!
//! This crate provides integration with Google's Gemini models through
//! the Generative Language API. It implements the [`ChatModel`] trait
//! from `pagesmith`.
//!
//! # Example
//!
//! ```no_run
//! use pagesmith_gemini::ChatGemini;
//! use pagesmith::{ChatModel, Message};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let model = ChatGemini::new()
//!     .with_model("gemini-1.5-pro")
//!     .with_temperature(0.2);
//!
//! let messages = vec![Message::human("Say hello")];
//! let result = model.generate(&messages).await?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! The Gemini API requires an API key. Get one from
//! <https://ai.google.dev/> and set it via environment variable:
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//! ```
//!
//! [`ChatGemini::new`] picks the key up from the environment; an absent
//! key is left empty and calls then fail at invocation time with the
//! provider's authentication error.
//!
//! [`ChatModel`]: pagesmith::ChatModel

/// Generative Language API base URL (default when no custom base is set)
pub const GEMINI_DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub mod chat_models;

pub use chat_models::ChatGemini;
