//! Static self-knowledge for the responder.
//!
//! The knowledge base is built once when a [`crate::Responder`] is
//! constructed and never mutated afterwards: an ordered capability list and
//! a fixed personality descriptor, both surfaced verbatim in replies.

use serde::{Deserialize, Serialize};

/// The five self-described capabilities, in the order they are enumerated
/// on inquiry.
const CAPABILITIES: [&str; 5] = [
    "Answering simple questions about myself and how I work",
    "Telling you the current time and date",
    "Evaluating a single arithmetic operation (+, -, *, / or ^)",
    "Responding to greetings and requests for help",
    "Listing these capabilities",
];

/// Fixed tone/approach/style descriptor woven into identity replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personality {
    /// Overall register of replies (e.g. "friendly").
    pub tone: String,
    /// How the responder tackles input (e.g. "direct").
    pub approach: String,
    /// Surface style of the text (e.g. "concise").
    pub style: String,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            tone: "friendly".to_string(),
            approach: "direct".to_string(),
            style: "concise".to_string(),
        }
    }
}

/// Immutable knowledge handed to the responder at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Ordered capability strings, enumerated 1-indexed on inquiry.
    pub capabilities: Vec<String>,
    /// Personality descriptor.
    pub personality: Personality,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Build the stock knowledge base.
    pub fn new() -> Self {
        Self {
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            personality: Personality::default(),
        }
    }
}
