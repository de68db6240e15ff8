//! Best-effort webhook calls
//!
//! The assistant and wallet widgets post small JSON bodies to externally
//! hosted automation webhooks. Every call is independent: there is no retry,
//! no de-duplication and no cancellation of earlier calls. A failed call is
//! logged and replaced by a locally defined fallback, so callers always get a
//! value back.

pub mod assistant;
pub mod wallet;

use std::borrow::Cow;
use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::error::{FintrixError, FintrixResult};

pub use assistant::{Assistant, ChatMessage, Speaker};
pub use wallet::{WalletSummary, WalletWidget};

/// Why a webhook call did not produce a usable response
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid webhook url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Outcome of a best-effort call
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The webhook answered
    Live(T),
    /// The call failed and `value` is the local substitute
    Fallback { value: T, reason: String },
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Live(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Live(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Failure description for fallbacks
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// HTTP client shared by the widgets
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> FintrixResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fintrix/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FintrixError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, WebhookError> {
        let endpoint = Url::parse(url).map_err(|e| WebhookError::InvalidUrl(format!("{url}: {e}")))?;

        debug!(%endpoint, "posting to webhook");
        let res = self.http.post(endpoint).json(body).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = res.text().await?;
        serde_json::from_str(&text).map_err(|e| WebhookError::Decode(e.to_string()))
    }
}

/// Automation webhooks sometimes wrap their payload in a one-element array
pub(crate) fn response_object(value: &Value) -> &Value {
    match value {
        Value::Array(items) => items.first().unwrap_or(value),
        other => other,
    }
}

/// Display text of a response field; empty strings and zero count as missing
fn field_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

/// First present string or number among `keys`, as text
pub(crate) fn first_string<'a>(value: &'a Value, keys: &[&str]) -> Option<Cow<'a, str>> {
    let object = response_object(value);
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(field_text)
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Minimal one-shot HTTP server for exercising the client

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buffer);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buffer.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Serve a single response; the handle yields the raw request text
    pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/hook", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            request
        });

        (url, handle)
    }

    /// Accept a connection and never answer
    pub async fn serve_silence() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/hook", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        });
        url
    }

    /// A URL nothing is listening on
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/hook", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> WebhookClient {
        WebhookClient::new(Duration::from_millis(500)).unwrap()
    }

    #[test]
    fn test_fetched_accessors() {
        let live: Fetched<u8> = Fetched::Live(1);
        let fallback = Fetched::Fallback {
            value: 2u8,
            reason: "down".into(),
        };
        assert_eq!(*live.value(), 1);
        assert!(!live.is_fallback());
        assert_eq!(live.reason(), None);
        assert_eq!(fallback.reason(), Some("down"));
        assert_eq!(fallback.into_value(), 2);
    }

    #[test]
    fn test_first_string_skips_empty_values() {
        let value = json!({"output": "", "message": null, "answer": 0, "response": "hi"});
        assert_eq!(
            first_string(&value, &["output", "message", "answer", "response"]).as_deref(),
            Some("hi")
        );
        assert_eq!(first_string(&json!({"output": [1]}), &["output"]), None);
        assert_eq!(first_string(&json!({}), &["output"]), None);
    }

    #[test]
    fn test_first_string_renders_numbers() {
        let value = json!({"output": "", "message": 42, "total": 24532.87});
        assert_eq!(first_string(&value, &["output", "message"]).as_deref(), Some("42"));
        assert_eq!(first_string(&value, &["total"]).as_deref(), Some("24532.87"));
    }

    #[test]
    fn test_first_string_unwraps_array() {
        let value = json!([{"output": "wrapped"}]);
        assert_eq!(first_string(&value, &["output"]).as_deref(), Some("wrapped"));
    }

    #[tokio::test]
    async fn test_post_json_success() {
        let (url, server) = test_server::serve_once(200, r#"{"ok":true}"#).await;
        let value = client().post_json(&url, &json!({"message": "hi"})).await.unwrap();
        assert_eq!(value["ok"], true);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /hook"));
        assert!(request.contains(r#"{"message":"hi"}"#));
    }

    #[tokio::test]
    async fn test_post_json_status_error() {
        let (url, _server) = test_server::serve_once(500, r#"{"error":"boom"}"#).await;
        let err = client().post_json(&url, &json!({})).await.unwrap_err();
        assert!(matches!(err, WebhookError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_post_json_decode_error() {
        let (url, _server) = test_server::serve_once(200, "not json").await;
        let err = client().post_json(&url, &json!({})).await.unwrap_err();
        assert!(matches!(err, WebhookError::Decode(_)));
    }

    #[tokio::test]
    async fn test_post_json_unreachable() {
        let url = test_server::unreachable_url().await;
        let err = client().post_json(&url, &json!({})).await.unwrap_err();
        assert!(matches!(err, WebhookError::Transport(_)));
    }

    #[tokio::test]
    async fn test_post_json_timeout() {
        let url = test_server::serve_silence().await;
        let err = client().post_json(&url, &json!({})).await.unwrap_err();
        assert!(matches!(err, WebhookError::Transport(ref e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = client().post_json("not a url", &json!({})).await.unwrap_err();
        assert!(matches!(err, WebhookError::InvalidUrl(_)));
    }
}
