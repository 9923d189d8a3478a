//! Chat message and transcript turn types
//!
//! Two vocabularies live here. [`Turn`] is what the transcript stores:
//! the user/assistant exchange the UI renders. [`Message`] is what goes
//! over the wire to a model: system instructions plus the human prompt.

use serde::{Deserialize, Serialize};

/// Who authored a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing page descriptions
    User,
    /// The model's generated HTML
    Assistant,
}

impl Role {
    /// Lowercase wire name, matching the serde representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One entry in the chat transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who authored this turn
    pub role: Role,
    /// Verbatim text: the user's description or the model's HTML
    pub content: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A message sent to a chat model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    /// System instructions (the agent's role and output rules)
    System {
        /// Instruction text
        content: String,
    },
    /// Human input (the filled task prompt)
    Human {
        /// Prompt text
        content: String,
    },
    /// Model output
    #[serde(rename = "ai")]
    AI {
        /// Response text
        content: String,
    },
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Create a human message.
    pub fn human(content: impl Into<String>) -> Self {
        Message::Human {
            content: content.into(),
        }
    }

    /// Create an AI message.
    pub fn ai(content: impl Into<String>) -> Self {
        Message::AI {
            content: content.into(),
        }
    }

    /// The message text.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Message::System { content } | Message::Human { content } | Message::AI { content } => {
                content
            }
        }
    }

    /// Role label for logging.
    #[must_use]
    pub fn role_name(&self) -> &'static str {
        match self {
            Message::System { .. } => "system",
            Message::Human { .. } => "human",
            Message::AI { .. } => "ai",
        }
    }
}
