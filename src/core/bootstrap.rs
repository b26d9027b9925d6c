//! Wires settings into a ready-to-run scanner.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Settings;
use crate::core::scanner::Scanner;
use crate::services::notifier::TelegramNotifier;
use crate::services::yahoo::YahooFinanceProvider;

pub fn build_scanner(settings: &Settings) -> Result<Scanner, Box<dyn std::error::Error + Send + Sync>> {
    let watchlist = settings.load_watchlist()?;
    if watchlist.is_empty() {
        warn!("Watchlist is empty - scans will produce no alerts");
    } else {
        info!(
            entries = watchlist.entries.len(),
            symbols = ?watchlist.symbols(),
            positions = watchlist.positions.len(),
            "Loaded watchlist"
        );
    }

    let provider = YahooFinanceProvider::new(&settings.yahoo_base_url, settings.http_timeout)?
        .with_max_retries(settings.fetch_retries);
    let positions = Arc::new(watchlist.position_book());

    let mut scanner = Scanner::new(Arc::new(provider), positions, watchlist)
        .with_lookback(settings.lookback.clone());

    match &settings.telegram {
        Some(telegram) => {
            let notifier = TelegramNotifier::new(
                telegram.api_url.clone(),
                telegram.token.clone(),
                telegram.chat_id.clone(),
                settings.http_timeout,
            )?;
            scanner = scanner.with_notifier(Arc::new(notifier));
            info!("Telegram delivery enabled");
        }
        None => {
            warn!("TELEGRAM_TOKEN / TELEGRAM_CHAT_ID not set - alerts will only be logged");
        }
    }

    Ok(scanner)
}
