//! # Rulebot
//!
//! A minimal rule-based conversational responder. Incoming messages are
//! classified against an ordered set of regex/keyword rules and answered
//! with canned or lightly templated strings — there is no model call, no
//! learning, and no persistence beyond an in-memory conversation log.
//!
//! The crate ships three pieces:
//!
//! - [`Responder`] — classification and reply templating plus the
//!   append-only conversation log.
//! - [`server`] — an axum HTTP adapter exposing the responder as
//!   `POST /chat` with a `GET /health` liveness probe.
//! - [`chat`] — the client-side chat surface: a display transcript, an
//!   awaiting-reply flag, and a reqwest transport for the endpoint.

pub mod chat;
pub mod knowledge;
pub mod memory;
pub mod responder;
pub mod server;

pub use knowledge::{KnowledgeBase, Personality};
pub use memory::{ConversationLog, ConversationTurn, Role};
pub use responder::Responder;

/// Crate version reported by the `/health` endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
