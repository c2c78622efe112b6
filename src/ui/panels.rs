use eframe::egui::{Button, ComboBox, RichText, Ui};
use strum::IntoEnumIterator;

use crate::config::UI_CONFIG;
use crate::models::{CryptoCurrency, Currency, Theme, TimeRange};
use crate::ui::format::{format_market_cap, format_percentage, format_price};
use crate::ui::styles::{change_color, UiStyleExt};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// One event per control change; the panel never mutates dashboard state
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlsEvent {
    CoinChanged(String),
    CurrencyChanged(Currency),
    TimeRangeChanged(TimeRange),
    ThemeChanged(Theme),
    AddCoin(String),
}

/// Panel with the four selectors plus quick-add buttons
pub struct ControlsPanel<'a> {
    selected_coin: String,
    currency: Currency,
    time_range: TimeRange,
    theme: Theme,
    available_coins: &'a [CryptoCurrency],
    tracked_coins: &'a [String],
}

impl<'a> ControlsPanel<'a> {
    pub fn new(
        selected_coin: String,
        currency: Currency,
        time_range: TimeRange,
        theme: Theme,
        available_coins: &'a [CryptoCurrency],
        tracked_coins: &'a [String],
    ) -> Self {
        Self {
            selected_coin,
            currency,
            time_range,
            theme,
            available_coins,
            tracked_coins,
        }
    }

    fn render_coin_selector(&mut self, ui: &mut Ui) -> Option<String> {
        let mut changed = None;

        ui.label_subdued("Chart Cryptocurrency");
        let selected_text = self
            .available_coins
            .iter()
            .find(|c| c.id == self.selected_coin)
            .map(|c| format!("{} ({})", c.name, c.symbol.to_uppercase()))
            .unwrap_or_else(|| self.selected_coin.clone());

        ComboBox::from_id_salt("chart_coin")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for coin in self.available_coins {
                    let label = format!("{} ({})", coin.name, coin.symbol.to_uppercase());
                    if ui
                        .selectable_value(&mut self.selected_coin, coin.id.clone(), label)
                        .clicked()
                    {
                        changed = Some(coin.id.clone());
                    }
                }
            });

        changed
    }

    fn render_currency_selector(&mut self, ui: &mut Ui) -> Option<Currency> {
        let mut changed = None;

        ui.label_subdued("Currency");
        ComboBox::from_id_salt("currency")
            .selected_text(self.currency.code())
            .show_ui(ui, |ui| {
                for currency in Currency::iter() {
                    if ui
                        .selectable_value(&mut self.currency, currency, currency.code())
                        .clicked()
                    {
                        changed = Some(self.currency);
                    }
                }
            });

        changed
    }

    fn render_time_range_selector(&mut self, ui: &mut Ui) -> Option<TimeRange> {
        let mut changed = None;

        ui.label_subdued("Time Range");
        ComboBox::from_id_salt("time_range")
            .selected_text(self.time_range.label())
            .show_ui(ui, |ui| {
                for range in TimeRange::iter() {
                    if ui
                        .selectable_value(&mut self.time_range, range, range.label())
                        .clicked()
                    {
                        changed = Some(self.time_range);
                    }
                }
            });

        changed
    }

    fn render_theme_selector(&mut self, ui: &mut Ui) -> Option<Theme> {
        let mut changed = None;

        ui.label_subdued("Theme");
        ComboBox::from_id_salt("theme")
            .selected_text(self.theme.label())
            .show_ui(ui, |ui| {
                for theme in Theme::iter() {
                    if ui
                        .selectable_value(&mut self.theme, theme, theme.label())
                        .clicked()
                    {
                        changed = Some(self.theme);
                    }
                }
            });

        changed
    }

    /// Quick-add buttons for coins not yet tracked, bounded to a small
    /// preview count.
    fn render_quick_add(&mut self, ui: &mut Ui) -> Vec<String> {
        let mut added = Vec::new();

        let candidates: Vec<&CryptoCurrency> = self
            .available_coins
            .iter()
            .filter(|c| !self.tracked_coins.contains(&c.id))
            .take(UI_CONFIG.quick_add_preview)
            .collect();

        if candidates.is_empty() {
            return added;
        }

        ui.add_space(8.0);
        ui.label_subdued("Add Cryptocurrency to Dashboard");
        ui.horizontal_wrapped(|ui| {
            for coin in candidates {
                let label = format!("+ {}", coin.symbol.to_uppercase());
                if ui.add(Button::new(label).small()).clicked() {
                    added.push(coin.id.clone());
                }
            }
        });

        added
    }
}

impl<'a> Panel for ControlsPanel<'a> {
    type Event = ControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.heading("Dashboard Controls");
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            ui.vertical(|ui| {
                if let Some(coin) = self.render_coin_selector(ui) {
                    events.push(ControlsEvent::CoinChanged(coin));
                }
            });
            ui.add_space(12.0);
            ui.vertical(|ui| {
                if let Some(currency) = self.render_currency_selector(ui) {
                    events.push(ControlsEvent::CurrencyChanged(currency));
                }
            });
            ui.add_space(12.0);
            ui.vertical(|ui| {
                if let Some(range) = self.render_time_range_selector(ui) {
                    events.push(ControlsEvent::TimeRangeChanged(range));
                }
            });
            ui.add_space(12.0);
            ui.vertical(|ui| {
                if let Some(theme) = self.render_theme_selector(ui) {
                    events.push(ControlsEvent::ThemeChanged(theme));
                }
            });
        });

        for coin in self.render_quick_add(ui) {
            events.push(ControlsEvent::AddCoin(coin));
        }

        ui.add_space(6.0);
        events
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    Remove(String),
}

/// Grid of per-coin summary cards
pub struct CardsPanel<'a> {
    coins: Vec<&'a CryptoCurrency>,
    currency: Currency,
    show_remove: bool,
}

impl<'a> CardsPanel<'a> {
    /// `coins` must already be filtered to the tracked set, in tracking
    /// order.
    pub fn new(coins: Vec<&'a CryptoCurrency>, currency: Currency, show_remove: bool) -> Self {
        Self {
            coins,
            currency,
            show_remove,
        }
    }

    fn render_card(&self, ui: &mut Ui, coin: &CryptoCurrency) -> Option<CardEvent> {
        let mut event = None;

        ui.group(|ui| {
            ui.set_min_width(220.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&coin.name).strong());
                    ui.label_subdued(coin.symbol.to_uppercase());
                });
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Min),
                    |ui| {
                        if self.show_remove && ui.small_button("✖").clicked() {
                            event = Some(CardEvent::Remove(coin.id.clone()));
                        }
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format_price(coin.current_price, self.currency))
                                    .strong(),
                            );
                            ui.label(
                                RichText::new(format_percentage(
                                    coin.price_change_percentage_24h,
                                ))
                                .small()
                                .color(change_color(coin.price_change_percentage_24h)),
                            );
                        });
                    },
                );
            });

            ui.separator();
            let value_color = ui.visuals().text_color();
            ui.metric(
                "Market Cap",
                &format_market_cap(coin.market_cap, self.currency),
                value_color,
            );
            ui.metric("Rank", &format!("#{}", coin.market_cap_rank), value_color);
        });

        event
    }
}

impl<'a> Panel for CardsPanel<'a> {
    type Event = CardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        for row in self.coins.chunks(UI_CONFIG.cards_per_row) {
            ui.horizontal_wrapped(|ui| {
                for coin in row {
                    if let Some(event) = self.render_card(ui, coin) {
                        events.push(event);
                    }
                }
            });
            ui.add_space(4.0);
        }

        events
    }
}
