//! Chat model abstraction
//!
//! [`ChatModel`] is the seam between the pipeline and a hosted
//! provider. The real implementation lives in `pagesmith-gemini`;
//! [`FakeChatModel`] is the scripted double used throughout the tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::messages::Message;

/// Token accounting reported by a provider, when available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub input_tokens: u32,
    /// Tokens in the completion
    pub output_tokens: u32,
}

/// The result of one chat model call.
#[derive(Debug, Clone)]
pub struct ChatResult {
    /// The assistant text, verbatim
    pub content: String,
    /// Token usage, if the provider reported it
    pub usage: Option<TokenUsage>,
}

impl ChatResult {
    /// Create a result with no usage information.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
        }
    }

    /// Attach token usage.
    #[must_use]
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// A hosted chat model.
///
/// One synchronous (awaited) request per call; implementations do not
/// retry, stream or time out beyond their HTTP client's defaults.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the messages and return the model's response.
    async fn generate(&self, messages: &[Message]) -> Result<ChatResult>;

    /// Model identifier for log attribution.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Default)]
struct FakeState {
    next_reply: usize,
    fail_next: bool,
    requests: Vec<Vec<Message>>,
}

/// A scripted chat model for tests.
///
/// Cycles through its canned replies, records every request it
/// receives, and can be told to fail the next call.
pub struct FakeChatModel {
    replies: Vec<String>,
    state: Mutex<FakeState>,
}

impl FakeChatModel {
    /// Create a fake model cycling through `replies`.
    #[must_use]
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies,
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Make the next `generate` call fail with an API error.
    pub fn fail_next(&self) {
        self.state.lock().fail_next = true;
    }

    /// Number of calls received so far, including failed ones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.lock().requests.len()
    }

    /// All message batches received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.state.lock().requests.clone()
    }
}

#[async_trait]
impl ChatModel for FakeChatModel {
    async fn generate(&self, messages: &[Message]) -> Result<ChatResult> {
        let mut state = self.state.lock();
        state.requests.push(messages.to_vec());

        if state.fail_next {
            state.fail_next = false;
            return Err(Error::api("Scripted failure"));
        }

        if self.replies.is_empty() {
            return Err(Error::api("FakeChatModel has no replies configured"));
        }

        let reply = self.replies[state.next_reply % self.replies.len()].clone();
        state.next_reply += 1;
        Ok(ChatResult::new(reply))
    }

    fn model_name(&self) -> &str {
        "fake-chat-model"
    }
}
