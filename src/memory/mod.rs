//! Append-only conversation memory for the responder.
//!
//! Every completed exchange appends exactly two turns — user then agent —
//! so the log length is always even between calls. Turns are never removed
//! or rewritten; the log grows for the lifetime of the process. History is
//! recorded for inspection only and never feeds back into classification.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The responder side.
    Agent,
}

/// A single role-tagged entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who said it.
    pub role: Role,
    /// What was said, verbatim.
    pub content: String,
}

/// The responder's append-only history.
///
/// Deliberately exposes no removal or mutation API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end of the log.
    pub fn record(&mut self, role: Role, content: &str) {
        self.turns.push(ConversationTurn {
            role,
            content: content.to_string(),
        });
    }

    /// Number of turns recorded so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate over the turns in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut log = ConversationLog::new();
        log.record(Role::User, "hello");
        log.record(Role::Agent, "hi there");
        log.record(Role::User, "2 + 2");

        let turns: Vec<_> = log.iter().collect();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "hello");
        assert_eq!(turns[1].role, Role::Agent);
        assert_eq!(turns[2].content, "2 + 2");
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let turn = ConversationTurn {
            role: Role::Agent,
            content: "ok".to_string(),
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "agent");
    }

    #[test]
    fn test_empty_log() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
