//! CLI commands for the finance assistant

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Settings;
use crate::error::{FintrixError, FintrixResult};
use crate::webhook::assistant::OFFLINE_NOTICE;
use crate::webhook::{Assistant, Fetched, WebhookClient};

fn assistant(settings: &Settings) -> FintrixResult<Assistant> {
    let client = WebhookClient::new(settings.request_timeout())?;
    Ok(Assistant::new(client, settings.assistant_url.clone()))
}

fn print_reply(reply: &Fetched<String>) {
    if reply.is_fallback() {
        eprintln!("ℹ {}", OFFLINE_NOTICE);
    }
    println!("{}", reply.value());
}

/// Ask a single question
pub async fn handle_ask_command(settings: &Settings, words: Vec<String>) -> FintrixResult<()> {
    let message = words.join(" ");
    let mut assistant = assistant(settings)?;
    let reply = assistant.ask(&message).await?;
    print_reply(&reply);
    Ok(())
}

/// Interactive conversation until EOF or `exit`
pub async fn handle_chat_command(settings: &Settings) -> FintrixResult<()> {
    let mut assistant = assistant(settings)?;
    if let Some(greeting) = assistant.history().first() {
        println!("{}", greeting.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| FintrixError::Io(format!("Failed to read input: {}", e)))?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = assistant.ask(line).await?;
        print_reply(&reply);
    }

    Ok(())
}
