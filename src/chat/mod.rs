//! Client-side chat surface.
//!
//! The surface owns its own display transcript — a parallel log with no
//! shared identity with the responder's history — plus a single
//! awaiting-reply flag. Submitting a message appends the user entry
//! immediately, issues the request, and appends either the returned reply
//! or a fixed error message. No retry, no de-duplication, no cancellation.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::Role;
pub use self::client::{HttpChatClient, ReplyTransport, TransportError};

/// Fixed transcript entry shown when a request fails.
const REQUEST_FAILED: &str =
    "Sorry — I couldn't reach the responder just now. Please try again.";

/// A display-facing transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Who the entry belongs to.
    pub role: Role,
    /// The displayed text.
    pub content: String,
    /// When the entry was appended to the transcript.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn now(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// An ordered, append-only display transcript with a pending-request flag.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    awaiting_reply: bool,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The transcript so far, in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a request is currently in flight.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Submit a message through the transport and return the appended
    /// reply entry.
    ///
    /// The user entry lands on the transcript before the request is
    /// issued; a transport failure becomes the fixed error entry rather
    /// than surfacing to the caller.
    pub async fn submit<T: ReplyTransport>(&mut self, input: &str, transport: &T) -> &Message {
        self.messages.push(Message::now(Role::User, input));
        self.awaiting_reply = true;

        let entry = match transport.send(input).await {
            Ok(reply) => Message::now(Role::Agent, &reply),
            Err(e) => {
                tracing::warn!("chat request failed: {}", e);
                Message::now(Role::Agent, REQUEST_FAILED)
            }
        };

        self.messages.push(entry);
        self.awaiting_reply = false;

        self.messages.last().expect("reply entry just appended")
    }
}
