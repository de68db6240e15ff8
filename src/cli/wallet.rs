//! CLI command for the crypto wallet summary

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::info;

use crate::config::Settings;
use crate::error::FintrixResult;
use crate::webhook::wallet::REFRESH_FAILED_NOTICE;
use crate::webhook::{Fetched, WalletSummary, WalletWidget, WebhookClient};

fn print_summary(fetched: &Fetched<WalletSummary>) {
    if let Some(reason) = fetched.reason() {
        eprintln!("⚠ {}: {}", REFRESH_FAILED_NOTICE, reason);
    }
    print!("{}", fetched.value().format_terminal());
}

/// Refresh on every tick until `stop` resolves; returns the number of refreshes
async fn watch_until(widget: &mut WalletWidget, mut ticker: Interval, stop: impl Future) -> usize {
    tokio::pin!(stop);
    let mut refreshes = 0;

    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => {
                print_summary(&widget.fetch_summary().await);
                println!();
                refreshes += 1;
            }
        }
    }

    refreshes
}

/// Show the wallet summary once, or keep refreshing it with `watch`
pub async fn handle_wallet_command(
    settings: &Settings,
    watch: bool,
    interval_secs: Option<u64>,
) -> FintrixResult<()> {
    let client = WebhookClient::new(settings.request_timeout())?;
    let mut widget = WalletWidget::new(client, settings.wallet_url.clone(), settings.client_tag.clone());

    if !watch {
        print_summary(&widget.fetch_summary().await);
        return Ok(());
    }

    let period = interval_secs
        .map(|secs| Duration::from_secs(secs.max(1)))
        .unwrap_or_else(|| settings.wallet_refresh());
    info!(?period, "watching wallet summary");

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let refreshes = watch_until(&mut widget, ticker, tokio::signal::ctrl_c()).await;
    info!(refreshes, "wallet watch stopped");

    Ok(())
}
