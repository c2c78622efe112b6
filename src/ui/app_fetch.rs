use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use poll_promise::Promise;

use crate::models::{CryptoCurrency, PriceHistory};
use crate::ui::app::{AppError, DashboardApp};

/// Completed fetch payload plus the sequence it was spawned under.
///
/// Sequences are the stale-response guard: the controller bumps the per-kind
/// counter on every spawn (and on reload), and a completion whose captured
/// sequence trails the current one is discarded instead of overwriting newer
/// state.
pub(super) struct FetchOutcome<T> {
    pub(super) result: Result<T, AppError>,
    pub(super) seq: u64,
    elapsed: Duration,
}

impl<T> FetchOutcome<T> {
    pub(super) fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

fn run_fetch<T, F>(seq: u64, rt: tokio::runtime::Handle, fut: F) -> FetchOutcome<T>
where
    F: std::future::Future<Output = anyhow::Result<T>>,
{
    let start = Instant::now();
    let result = rt
        .block_on(fut)
        .map_err(|e| AppError::FetchFailed(format!("{:#}", e)));
    FetchOutcome {
        result,
        seq,
        elapsed: start.elapsed(),
    }
}

impl DashboardApp {
    /// Spawns a fetch for each stale kind that has no promise in flight.
    /// Coin-list and price-history fetches run concurrently when both are
    /// due; neither blocks the UI thread.
    pub(super) fn spawn_stale_fetches(&mut self) {
        if self.markets_stale && self.markets_promise.is_none() {
            self.markets_stale = false;
            self.markets_seq += 1;
            let seq = self.markets_seq;
            let source = Arc::clone(&self.source);
            let rt = self.rt.clone();
            let currency = self.prefs.currency;

            self.markets_promise = Some(Promise::spawn_thread("fetch_markets", move || {
                run_fetch(seq, rt, source.list_markets(currency))
            }));
        }

        if self.history_stale && self.history_promise.is_none() {
            if self.prefs.selected_coin.is_empty() {
                self.history_stale = false;
                return;
            }
            self.history_stale = false;
            self.history_seq += 1;
            let seq = self.history_seq;
            let source = Arc::clone(&self.source);
            let rt = self.rt.clone();
            let coin = self.prefs.selected_coin.clone();
            let currency = self.prefs.currency;
            let days = self.prefs.time_range.days();

            self.history_promise = Some(Promise::spawn_thread("fetch_history", move || {
                run_fetch(seq, rt, async move {
                    source.price_history(&coin, currency, days).await
                })
            }));
        }
    }

    pub(super) fn poll_fetches(&mut self, ctx: &egui::Context) {
        if let Some(promise) = self.markets_promise.take() {
            match promise.try_take() {
                Ok(outcome) => self.apply_markets_outcome(outcome),
                Err(promise) => self.markets_promise = Some(promise),
            }
        }

        if let Some(promise) = self.history_promise.take() {
            match promise.try_take() {
                Ok(outcome) => self.apply_history_outcome(outcome),
                Err(promise) => self.history_promise = Some(promise),
            }
        }

        if self.markets_promise.is_some() || self.history_promise.is_some() {
            ctx.request_repaint();
        }
    }

    fn apply_markets_outcome(&mut self, outcome: FetchOutcome<Vec<CryptoCurrency>>) {
        if outcome.seq != self.markets_seq {
            log::debug!("Discarding superseded coin-list response");
            return;
        }

        let elapsed = outcome.elapsed();
        match outcome.result {
            Ok(markets) => {
                log::info!(
                    "Fetched {} market entries in {:.2}s",
                    markets.len(),
                    elapsed.as_secs_f32()
                );
                self.markets = markets;
            }
            Err(error) => {
                log::error!("Coin-list fetch failed: {}", error);
                self.last_error = Some(error);
            }
        }
    }

    fn apply_history_outcome(&mut self, outcome: FetchOutcome<PriceHistory>) {
        if outcome.seq != self.history_seq {
            log::debug!("Discarding superseded price-history response");
            return;
        }

        let elapsed = outcome.elapsed();
        match outcome.result {
            Ok(history) => {
                log::info!(
                    "Fetched {} history samples in {:.2}s",
                    history.prices.len(),
                    elapsed.as_secs_f32()
                );
                self.history = Some(history);
            }
            Err(error) => {
                log::error!("Price-history fetch failed: {}", error);
                self.last_error = Some(error);
            }
        }
    }
}
