//! In-memory chat transcript
//!
//! The transcript is the only mutable state in Pagesmith: an ordered,
//! append-only sequence of turns living for the process lifetime. There
//! is no persistence, no eviction and no size bound.

use crate::messages::{Role, Turn};

/// Ordered, append-only conversation history.
///
/// A user turn is always appended before the model call it triggers; an
/// assistant turn is appended only when that call succeeds. Ordering is
/// therefore strictly user/assistant interleaved except after failed
/// turns, which leave a user entry with no counterpart.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    /// Append an already-constructed turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns, oldest first.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the transcript has no turns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Format the transcript as prefixed lines, one per turn.
    ///
    /// ```text
    /// User: a red button that says Hello
    /// Assistant: <html>...</html>
    /// ```
    #[must_use]
    pub fn as_buffer_string(&self, user_prefix: &str, assistant_prefix: &str) -> String {
        let lines: Vec<String> = self
            .turns
            .iter()
            .map(|turn| match turn.role {
                Role::User => format!("{}: {}", user_prefix, turn.content),
                Role::Assistant => format!("{}: {}", assistant_prefix, turn.content),
            })
            .collect();
        lines.join("\n")
    }
}
