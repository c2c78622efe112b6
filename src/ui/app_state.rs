use crate::config::FALLBACK_COIN;
use crate::models::{Currency, Theme, TimeRange};

use super::app::DashboardApp;

/// Event transitions. Each one mutates the live state, persists the full
/// preferences record, and marks the affected fetch kinds stale; the actual
/// network work happens on the next frame.
impl DashboardApp {
    pub(super) fn handle_currency_change(&mut self, currency: Currency) {
        if self.prefs.currency == currency {
            return;
        }
        self.prefs.currency = currency;
        self.persist_prefs();

        // Prices are currency-denominated on both endpoints
        self.mark_markets_stale("currency changed");
        self.mark_history_stale("currency changed");
    }

    pub(super) fn handle_coin_selected(&mut self, coin_id: String) {
        if self.prefs.selected_coin == coin_id {
            return;
        }
        self.prefs.selected_coin = coin_id;
        self.persist_prefs();
        self.mark_history_stale("charted coin changed");
    }

    pub(super) fn handle_time_range_change(&mut self, range: TimeRange) {
        if self.prefs.time_range == range {
            return;
        }
        self.prefs.time_range = range;
        self.persist_prefs();
        self.mark_history_stale("time range changed");
    }

    /// No re-fetch: the theme is applied to the visuals each frame.
    pub(super) fn handle_theme_change(&mut self, theme: Theme) {
        if self.prefs.theme == theme {
            return;
        }
        self.prefs.theme = theme;
        self.persist_prefs();
    }

    pub(super) fn handle_add_coin(&mut self, coin_id: String) {
        if self.prefs.selected_coins.contains(&coin_id) {
            return;
        }
        self.prefs.selected_coins.push(coin_id);
        self.persist_prefs();
    }

    /// Removes a coin from the tracked set. Removing the charted coin
    /// reselects the first remaining tracked coin; removing the last coin
    /// substitutes the fixed fallback so the set is never driven empty.
    pub(super) fn handle_remove_coin(&mut self, coin_id: &str) {
        if !self.prefs.selected_coins.iter().any(|id| id == coin_id) {
            return;
        }
        self.prefs.selected_coins.retain(|id| id != coin_id);
        if self.prefs.selected_coins.is_empty() {
            self.prefs.selected_coins.push(FALLBACK_COIN.to_string());
        }

        if self.prefs.selected_coin == coin_id {
            self.prefs.selected_coin = self.prefs.selected_coins[0].clone();
            self.mark_history_stale("charted coin removed from tracking");
        }
        self.persist_prefs();
    }

    /// Manual retry after a fetch failure: drop everything fetched, bump the
    /// sequences so any response still in flight is discarded, and refetch
    /// both kinds.
    pub(super) fn reload(&mut self) {
        log::info!("Reloading dashboard after error");
        self.markets.clear();
        self.history = None;
        self.last_error = None;
        self.markets_seq += 1;
        self.history_seq += 1;
        self.mark_markets_stale("manual reload");
        self.mark_history_stale("manual reload");
    }

    pub(super) fn mark_markets_stale(&mut self, reason: &str) {
        log::debug!("Coin list marked stale: {}", reason);
        self.markets_stale = true;
    }

    pub(super) fn mark_history_stale(&mut self, reason: &str) {
        log::debug!("Price history marked stale: {}", reason);
        self.history_stale = true;
    }

    fn persist_prefs(&self) {
        self.store.save(&self.prefs);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FALLBACK_COIN;
    use crate::models::{Currency, Theme, TimeRange, UserPreferences};
    use crate::ui::test_support::{test_app, StubSource};

    fn prefs() -> UserPreferences {
        UserPreferences {
            selected_coins: vec!["bitcoin".into(), "ethereum".into(), "solana".into()],
            selected_coin: "ethereum".into(),
            currency: Currency::Eur,
            time_range: TimeRange::Day,
            theme: Theme::Dark,
        }
    }

    #[test]
    fn removing_the_charted_coin_reselects_first_remaining() {
        let (mut app, _dir, _rt) = test_app(prefs(), StubSource::default());

        app.handle_remove_coin("ethereum");

        assert_eq!(app.prefs.selected_coins, vec!["bitcoin", "solana"]);
        assert_eq!(app.prefs.selected_coin, "bitcoin");
        assert!(app.history_stale);
        // persisted too
        assert_eq!(app.store.load().selected_coin, "bitcoin");
    }

    #[test]
    fn removing_an_untracked_coin_is_a_no_op() {
        let (mut app, _dir, _rt) = test_app(prefs(), StubSource::default());

        app.handle_remove_coin("dogecoin");
        assert_eq!(app.prefs, prefs());
    }

    #[test]
    fn removing_the_last_coin_substitutes_the_fallback() {
        let one = UserPreferences {
            selected_coins: vec!["solana".into()],
            selected_coin: "solana".into(),
            ..UserPreferences::default()
        };
        let (mut app, _dir, _rt) = test_app(one, StubSource::default());

        app.handle_remove_coin("solana");

        assert_eq!(app.prefs.selected_coins, vec![FALLBACK_COIN]);
        assert_eq!(app.prefs.selected_coin, FALLBACK_COIN);
    }

    #[test]
    fn adding_a_tracked_coin_does_not_duplicate() {
        let (mut app, _dir, _rt) = test_app(prefs(), StubSource::default());

        app.handle_add_coin("bitcoin".into());
        assert_eq!(app.prefs.selected_coins.len(), 3);

        app.handle_add_coin("cardano".into());
        assert_eq!(
            app.prefs.selected_coins,
            vec!["bitcoin", "ethereum", "solana", "cardano"]
        );
    }

    #[test]
    fn currency_change_refetches_both_and_persists_only_currency() {
        let initial = UserPreferences {
            selected_coins: vec!["bitcoin".into(), "ethereum".into()],
            selected_coin: "ethereum".into(),
            currency: Currency::Eur,
            time_range: TimeRange::Day,
            theme: Theme::Dark,
        };
        let (mut app, _dir, _rt) = test_app(initial.clone(), StubSource::default());
        app.markets_stale = false;
        app.history_stale = false;

        app.handle_currency_change(Currency::Usd);

        assert_eq!(app.prefs.currency, Currency::Usd);
        assert!(app.markets_stale);
        assert!(app.history_stale);

        let reloaded = app.store.load();
        assert_eq!(reloaded.currency, Currency::Usd);
        assert_eq!(reloaded.selected_coins, initial.selected_coins);
        assert_eq!(reloaded.selected_coin, initial.selected_coin);
        assert_eq!(reloaded.time_range, initial.time_range);
        assert_eq!(reloaded.theme, initial.theme);
    }

    #[test]
    fn selecting_a_coin_refetches_history_only() {
        let (mut app, _dir, _rt) = test_app(prefs(), StubSource::default());
        app.markets_stale = false;
        app.history_stale = false;

        app.handle_coin_selected("bitcoin".into());

        assert_eq!(app.prefs.selected_coin, "bitcoin");
        assert!(!app.markets_stale);
        assert!(app.history_stale);
    }

    #[test]
    fn theme_change_persists_without_refetch() {
        let (mut app, _dir, _rt) = test_app(prefs(), StubSource::default());
        app.markets_stale = false;
        app.history_stale = false;

        app.handle_theme_change(Theme::Light);

        assert_eq!(app.prefs.theme, Theme::Light);
        assert!(!app.markets_stale);
        assert!(!app.history_stale);
        assert_eq!(app.store.load().theme, Theme::Light);
    }

    #[test]
    fn loading_an_untracked_charted_coin_falls_back_on_construction() {
        let broken = UserPreferences {
            selected_coins: vec!["bitcoin".into(), "solana".into()],
            selected_coin: "dogecoin".into(),
            ..UserPreferences::default()
        };
        let (app, _dir, _rt) = test_app(broken, StubSource::default());

        assert_eq!(app.prefs.selected_coin, "bitcoin");
    }
}
