//! Page-generation pipeline and turn handler
//!
//! [`PageGenerator`] is the one-agent, one-task pipeline: fill the task
//! template with the user's description, send it to the model under
//! the developer-agent instructions, hand the response back verbatim.
//! [`ChatSession`] wraps it with the transcript bookkeeping for one
//! chat conversation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::language_models::ChatModel;
use crate::messages::Message;
use crate::prompt::{PromptTemplate, DEVELOPER_AGENT_INSTRUCTIONS, PAGE_TASK_TEMPLATE};
use crate::transcript::Transcript;

/// Single-agent HTML generation pipeline.
///
/// Runs exactly one model call per invocation: no retries, no
/// branching, no post-processing of the response.
pub struct PageGenerator {
    model: Arc<dyn ChatModel>,
    system_instructions: String,
    task_template: PromptTemplate,
}

impl PageGenerator {
    /// Create a generator with the default developer-agent prompts.
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            system_instructions: DEVELOPER_AGENT_INSTRUCTIONS.to_string(),
            task_template: PromptTemplate::new(PAGE_TASK_TEMPLATE),
        }
    }

    /// Replace the system instructions.
    #[must_use]
    pub fn with_system_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.system_instructions = instructions.into();
        self
    }

    /// Replace the task template. It must take a `{specification}`
    /// variable.
    #[must_use]
    pub fn with_task_template(mut self, template: PromptTemplate) -> Self {
        self.task_template = template;
        self
    }

    /// Generate an HTML document for the given page description.
    ///
    /// The description must be non-empty. The return value is the
    /// model's output verbatim: no sanitization, no schema validation.
    pub async fn generate(&self, specification: &str) -> Result<String> {
        if specification.trim().is_empty() {
            return Err(Error::invalid_input("page description must not be empty"));
        }

        let mut variables = HashMap::new();
        variables.insert("specification".to_string(), specification.to_string());
        let prompt = self.task_template.format(&variables)?;

        let messages = vec![
            Message::system(&self.system_instructions),
            Message::human(prompt),
        ];

        debug!(
            model = self.model.model_name(),
            spec_len = specification.len(),
            "requesting page generation"
        );
        let result = self.model.generate(&messages).await?;

        if let Some(usage) = result.usage {
            info!(
                model = self.model.model_name(),
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "page generated"
            );
        } else {
            info!(model = self.model.model_name(), "page generated");
        }

        Ok(result.content)
    }
}

/// One chat conversation: a transcript plus the generator that serves
/// its turns.
///
/// Turns run strictly one at a time (`&mut self`); each `submit` blocks
/// until its model call returns.
pub struct ChatSession {
    transcript: Transcript,
    generator: PageGenerator,
}

impl ChatSession {
    /// Create a session with an empty transcript.
    #[must_use]
    pub fn new(generator: PageGenerator) -> Self {
        Self {
            transcript: Transcript::new(),
            generator,
        }
    }

    /// The conversation so far.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Process one user submission.
    ///
    /// Empty submissions change nothing. Otherwise the user turn is
    /// appended before the model call; on success exactly one assistant
    /// turn with the raw output follows it, on failure the error
    /// propagates and the user turn stays without a counterpart.
    pub async fn submit(&mut self, user_text: &str) -> Result<String> {
        if user_text.trim().is_empty() {
            return Err(Error::invalid_input("page description must not be empty"));
        }

        self.transcript.push_user(user_text);
        let html = self.generator.generate(user_text).await?;
        self.transcript.push_assistant(html.clone());
        Ok(html)
    }
}
