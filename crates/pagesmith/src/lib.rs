//! Pagesmith core
//!
//! Pagesmith turns a free-text webpage description into a complete HTML
//! document through one hosted-model call per chat turn. This crate
//! holds everything that does not touch the network: the chat
//! transcript, the prompt templates, the [`ChatModel`] seam and the
//! single-agent generation pipeline.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pagesmith::{ChatSession, FakeChatModel, PageGenerator};
//!
//! # async fn example() -> pagesmith::Result<()> {
//! let model = Arc::new(FakeChatModel::new(vec!["<html></html>".to_string()]));
//! let mut session = ChatSession::new(PageGenerator::new(model));
//!
//! let html = session.submit("a red button that says Hello").await?;
//! assert!(html.starts_with("<html>"));
//! # Ok(())
//! # }
//! ```
//!
//! The real provider implementation lives in `pagesmith-gemini`; the
//! web UI in `pagesmith-server`.

pub mod error;
pub mod generator;
pub mod language_models;
pub mod messages;
pub mod prompt;
pub mod transcript;

pub use error::{Error, Result};
pub use generator::{ChatSession, PageGenerator};
pub use language_models::{ChatModel, ChatResult, FakeChatModel, TokenUsage};
pub use messages::{Message, Role, Turn};
pub use prompt::{PromptTemplate, DEVELOPER_AGENT_INSTRUCTIONS, PAGE_TASK_TEMPLATE};
pub use transcript::Transcript;
