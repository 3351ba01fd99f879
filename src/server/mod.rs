//! HTTP adapter for the responder.
//!
//! Exposes the rule-based responder as an HTTP service.
//!
//! # Endpoints
//!
//! - `GET  /health` — Liveness probe
//! - `POST /chat`   — Submit a message, receive the reply

pub mod routes;

pub use routes::{app_router, AppState, ChatReply, ChatRequest};
