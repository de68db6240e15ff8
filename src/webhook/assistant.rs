//! Chat assistant backed by a webhook
//!
//! Each question is posted as `{"message": ...}`. When the webhook is
//! unreachable the assistant answers from a small set of simulated replies
//! instead of reporting an error.

use serde::Serialize;
use tracing::{info, warn};

use super::{first_string, Fetched, WebhookClient};
use crate::error::{FintrixError, FintrixResult};

/// Response keys checked for the reply text, in priority order
pub const REPLY_KEYS: [&str; 6] = ["output", "message", "response", "answer", "reply", "text"];

/// Reply used when the webhook answers without any reply text
pub const NO_REPLY: &str = "I'm sorry, I couldn't process your request.";

/// Opening message of every conversation
pub const GREETING: &str =
    "Hello! I'm your finance assistant. Ask me anything about your spending patterns or financial habits.";

/// Simulated reply for questions about categories
pub const CATEGORY_REPLY: &str = "Your top spending categories are: Housing (35%), Food (25%), Transportation (15%), Entertainment (10%), and Others (15%).";

/// Simulated replies for everything else
pub const SIMULATED_REPLIES: [&str; 5] = [
    "Based on your spending patterns, your highest category of expenses is dining out, followed by transportation and entertainment.",
    "You've spent approximately 30% of your budget on housing, 20% on food, 15% on transportation, and the rest on miscellaneous expenses.",
    "Looking at your recent transactions, you might want to consider reducing spending in the entertainment category, which has increased by 15% from last month.",
    "Your spending in groceries this month is lower compared to last month, good job on the savings!",
    "Based on your current spending rate, you're on track to meet your monthly budget goals.",
];

/// Notice shown when a simulated reply is used
pub const OFFLINE_NOTICE: &str = "Using simulated responses - API connection unavailable";

/// Pick a simulated reply for a question
///
/// Questions about categories get the category breakdown; anything else maps
/// to one of the canned replies by a hash of its text, so the same question
/// always gets the same answer.
pub fn simulated_reply(query: &str) -> &'static str {
    let lowered = query.to_lowercase();
    if lowered.contains("category") || lowered.contains("spend per") {
        return CATEGORY_REPLY;
    }

    let hash = query
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(b)));
    SIMULATED_REPLIES[hash % SIMULATED_REPLIES.len()]
}

/// Reply text from a webhook response
pub fn extract_reply(response: &serde_json::Value) -> String {
    first_string(response, &REPLY_KEYS)
        .map(|reply| reply.into_owned())
        .unwrap_or_else(|| NO_REPLY.to_string())
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Serialize)]
struct AssistantRequest<'a> {
    message: &'a str,
}

/// A conversation with the assistant webhook
#[derive(Debug)]
pub struct Assistant {
    client: WebhookClient,
    url: String,
    history: Vec<ChatMessage>,
}

impl Assistant {
    /// Start a conversation; the history opens with the greeting
    pub fn new(client: WebhookClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            history: vec![ChatMessage {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    /// Messages so far, oldest first
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Ask a question
    ///
    /// Blank questions are rejected before any request is made. Any failure
    /// of the request itself yields a simulated reply.
    pub async fn ask(&mut self, message: &str) -> FintrixResult<Fetched<String>> {
        let message = message.trim();
        if message.is_empty() {
            return Err(FintrixError::Validation(
                "Message must not be empty".to_string(),
            ));
        }

        self.history.push(ChatMessage {
            speaker: Speaker::User,
            text: message.to_string(),
        });

        let reply = match self
            .client
            .post_json(&self.url, &AssistantRequest { message })
            .await
        {
            Ok(response) => {
                info!("assistant webhook answered");
                Fetched::Live(extract_reply(&response))
            }
            Err(err) => {
                warn!(error = %err, "assistant webhook failed, using simulated reply");
                Fetched::Fallback {
                    value: simulated_reply(message).to_string(),
                    reason: err.to_string(),
                }
            }
        };

        self.history.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: reply.value().clone(),
        });
        Ok(reply)
    }
}
