//! rulebot terminal chat client.
//!
//! A line-oriented REPL against a running rulebot server. Each submitted
//! line lands on the session transcript immediately; the reply (or the
//! fixed error entry when the server is unreachable) follows.
//!
//! # Environment Variables
//!
//! - `RULEBOT_URL` — Server base URL (default: `http://127.0.0.1:8080`)
//! - `RUST_LOG` — Tracing filter (default: "warn")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin chat
//! ```
//!
//! Exit with `/quit` or end-of-input.

use std::io::{self, BufRead, Write};

use rulebot::chat::{ChatSession, HttpChatClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let base_url =
        std::env::var("RULEBOT_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

    let client = HttpChatClient::new(&base_url);
    let mut session = ChatSession::new();

    println!("rulebot chat — connected to {} (/quit to exit)", base_url);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("you> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "/quit" {
            break;
        }

        let reply = session.submit(input, &client).await;
        println!("bot> {}", reply.content);
    }

    println!("bye — {} messages this session", session.messages().len());
    Ok(())
}
