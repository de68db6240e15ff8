//! Crypto wallet summary widget
//!
//! Posts a timestamped request to the wallet webhook and reads five display
//! fields from the answer. Any field the webhook leaves out falls back to its
//! own default; a failed refresh keeps the last good summary.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::{first_string, Fetched, WebhookClient};

pub const FALLBACK_TOTAL_BALANCE: &str = "$24,532.87";
pub const FALLBACK_CHANGE_24H: &str = "+2.4%";
pub const FALLBACK_MARKET_STATUS: &str = "Bullish";
pub const FALLBACK_TOP_PERFORMER: &str = "ETH +5.8%";

/// Notice shown when a refresh fails
pub const REFRESH_FAILED_NOTICE: &str = "Failed to update wallet summary";

/// Display time used for "last updated"
fn local_time(now: DateTime<Local>) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

/// Wallet figures as shown on the crypto page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletSummary {
    pub total_balance: String,
    pub change_24h: String,
    pub market_status: String,
    pub top_performer: String,
    pub last_updated: String,
}

impl WalletSummary {
    /// The fixed summary used when nothing has been fetched yet
    pub fn fallback(now: DateTime<Local>) -> Self {
        Self {
            total_balance: FALLBACK_TOTAL_BALANCE.to_string(),
            change_24h: FALLBACK_CHANGE_24H.to_string(),
            market_status: FALLBACK_MARKET_STATUS.to_string(),
            top_performer: FALLBACK_TOP_PERFORMER.to_string(),
            last_updated: local_time(now),
        }
    }

    /// Read a webhook response, defaulting each missing field on its own
    pub fn from_response(response: &Value, now: DateTime<Local>) -> Self {
        let field = |key: &str, default: &str| {
            first_string(response, &[key])
                .map(|text| text.into_owned())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            total_balance: field("totalBalance", FALLBACK_TOTAL_BALANCE),
            change_24h: field("change24h", FALLBACK_CHANGE_24H),
            market_status: field("marketStatus", FALLBACK_MARKET_STATUS),
            top_performer: field("topPerformer", FALLBACK_TOP_PERFORMER),
            last_updated: first_string(response, &["lastUpdated"])
                .map(|text| text.into_owned())
                .unwrap_or_else(|| local_time(now)),
        }
    }

    /// Whether the 24h change reads as a gain
    pub fn is_change_up(&self) -> bool {
        self.change_24h.trim_start().starts_with('+')
    }

    /// Format the summary card for terminal display
    pub fn format_terminal(&self) -> String {
        let arrow = if self.is_change_up() { "▲" } else { "▼" };
        let mut output = String::from("💼 Crypto Wallet Summary\n");
        output.push_str(&format!("  {:<14} {}\n", "Total Balance", self.total_balance));
        output.push_str(&format!("  {:<14} {} {}\n", "24h Change", arrow, self.change_24h));
        output.push_str(&format!("  {:<14} {}\n", "Market Status", self.market_status));
        output.push_str(&format!("  {:<14} {}\n", "Top Performer", self.top_performer));
        output.push_str(&format!("  Last updated: {}\n", self.last_updated));
        output
    }
}

#[derive(Serialize)]
struct WalletRequest<'a> {
    timestamp: String,
    client: &'a str,
}

/// Wallet summary widget state
#[derive(Debug)]
pub struct WalletWidget {
    client: WebhookClient,
    url: String,
    client_tag: String,
    last: Option<WalletSummary>,
}

impl WalletWidget {
    pub fn new(client: WebhookClient, url: impl Into<String>, client_tag: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            client_tag: client_tag.into(),
            last: None,
        }
    }

    /// Last summary fetched from the webhook, if any
    pub fn last(&self) -> Option<&WalletSummary> {
        self.last.as_ref()
    }

    /// Fetch a fresh summary
    ///
    /// On failure the previous live summary is returned as the fallback when
    /// there is one, otherwise the fixed default summary.
    pub async fn fetch_summary(&mut self) -> Fetched<WalletSummary> {
        let request = WalletRequest {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            client: &self.client_tag,
        };

        match self.client.post_json(&self.url, &request).await {
            Ok(response) => {
                let summary = WalletSummary::from_response(&response, Local::now());
                info!(balance = %summary.total_balance, "wallet summary refreshed");
                self.last = Some(summary.clone());
                Fetched::Live(summary)
            }
            Err(err) => {
                warn!(error = %err, "wallet summary refresh failed");
                let value = self
                    .last
                    .clone()
                    .unwrap_or_else(|| WalletSummary::fallback(Local::now()));
                Fetched::Fallback {
                    value,
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::test_server;
    use chrono::TimeZone;
    use serde_json::json;
    use std::time::Duration;

    fn client() -> WebhookClient {
        WebhookClient::new(Duration::from_millis(500)).unwrap()
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 28, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_fallback_summary() {
        let summary = WalletSummary::fallback(fixed_now());
        assert_eq!(summary.total_balance, "$24,532.87");
        assert_eq!(summary.change_24h, "+2.4%");
        assert_eq!(summary.market_status, "Bullish");
        assert_eq!(summary.top_performer, "ETH +5.8%");
        assert_eq!(summary.last_updated, "2:05:09 PM");
    }

    #[test]
    fn test_fields_fall_back_individually() {
        let response = json!({"totalBalance": "$1,000.00", "change24h": "", "marketStatus": "Bearish"});
        let summary = WalletSummary::from_response(&response, fixed_now());
        assert_eq!(summary.total_balance, "$1,000.00");
        assert_eq!(summary.change_24h, FALLBACK_CHANGE_24H);
        assert_eq!(summary.market_status, "Bearish");
        assert_eq!(summary.top_performer, FALLBACK_TOP_PERFORMER);
        assert_eq!(summary.last_updated, "2:05:09 PM");
    }

    #[test]
    fn test_numeric_fields_are_shown() {
        let response = json!({"totalBalance": 24532.87, "change24h": 0, "marketStatus": "Flat"});
        let summary = WalletSummary::from_response(&response, fixed_now());
        assert_eq!(summary.total_balance, "24532.87");
        assert_eq!(summary.change_24h, FALLBACK_CHANGE_24H);
        assert_eq!(summary.market_status, "Flat");
    }

    #[test]
    fn test_change_direction() {
        let mut summary = WalletSummary::fallback(fixed_now());
        assert!(summary.is_change_up());
        summary.change_24h = "-1.2%".into();
        assert!(!summary.is_change_up());
        assert!(summary.format_terminal().contains("▼ -1.2%"));
    }

    #[tokio::test]
    async fn test_refresh_live() {
        let (url, server) = test_server::serve_once(
            200,
            r#"{"totalBalance":"$9.99","lastUpdated":"just now"}"#,
        )
        .await;
        let mut widget = WalletWidget::new(client(), url, "fintrix-app");

        let fetched = widget.fetch_summary().await;
        assert!(!fetched.is_fallback());
        assert_eq!(fetched.value().total_balance, "$9.99");
        assert_eq!(fetched.value().last_updated, "just now");
        assert_eq!(widget.last().unwrap().total_balance, "$9.99");

        let request = server.await.unwrap();
        assert!(request.contains(r#""client":"fintrix-app""#));
        assert!(request.contains(r#""timestamp":""#));
    }

    #[tokio::test]
    async fn test_refresh_failure_without_history_uses_defaults() {
        let url = test_server::unreachable_url().await;
        let mut widget = WalletWidget::new(client(), url, "fintrix-app");

        let fetched = widget.fetch_summary().await;
        assert!(fetched.is_fallback());
        assert_eq!(fetched.value().total_balance, FALLBACK_TOTAL_BALANCE);
        assert!(widget.last().is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_last_summary() {
        let (url, _server) = test_server::serve_once(200, r#"{"totalBalance":"$1.00"}"#).await;
        let mut widget = WalletWidget::new(client(), url, "fintrix-app");
        assert!(!widget.fetch_summary().await.is_fallback());

        // the one-shot server is gone, so the second refresh fails
        let fetched = widget.fetch_summary().await;
        assert!(fetched.is_fallback());
        assert_eq!(fetched.value().total_balance, "$1.00");
    }
}
