use eframe::egui::{CentralPanel, Context, Frame, Margin, RichText, ScrollArea, TopBottomPanel};

use crate::chart::chart_points;
use crate::config::UI_CONFIG;
use crate::ui::panels::{CardEvent, CardsPanel, ControlsEvent, ControlsPanel, Panel};
use crate::ui::styles::UiStyleExt;

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(UI_CONFIG.page_title);
            ui.label_subdued(UI_CONFIG.page_subtitle);
            ui.add_space(8.0);
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if self.last_error.is_some() {
                self.render_error_view(ui);
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                self.render_controls(ui);
                ui.separator();

                if self.is_list_loading() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.add_space(12.0);
                        ui.heading("Loading market data...");
                        ui.add_space(40.0);
                    });
                    return;
                }

                ui.add_space(8.0);
                ui.heading("Top Cryptocurrencies");
                ui.add_space(6.0);
                self.render_cards(ui);

                ui.separator();
                self.render_chart(ui);
            });
        });
    }

    fn render_controls(&mut self, ui: &mut eframe::egui::Ui) {
        let mut panel = ControlsPanel::new(
            self.prefs.selected_coin.clone(),
            self.prefs.currency,
            self.prefs.time_range,
            self.prefs.theme,
            &self.markets,
            &self.prefs.selected_coins,
        );
        let events = panel.render(ui);

        for event in events {
            match event {
                ControlsEvent::CoinChanged(coin) => self.handle_coin_selected(coin),
                ControlsEvent::CurrencyChanged(currency) => self.handle_currency_change(currency),
                ControlsEvent::TimeRangeChanged(range) => self.handle_time_range_change(range),
                ControlsEvent::ThemeChanged(theme) => self.handle_theme_change(theme),
                ControlsEvent::AddCoin(coin) => self.handle_add_coin(coin),
            }
        }
    }

    fn render_cards(&mut self, ui: &mut eframe::egui::Ui) {
        let show_remove = self.prefs.selected_coins.len() > 1;
        let events = {
            let mut panel =
                CardsPanel::new(self.tracked_markets(), self.prefs.currency, show_remove);
            panel.render(ui)
        };

        for event in events {
            match event {
                CardEvent::Remove(coin) => self.handle_remove_coin(&coin),
            }
        }
    }

    fn render_chart(&mut self, ui: &mut eframe::egui::Ui) {
        let points = self
            .history
            .as_ref()
            .map(chart_points)
            .unwrap_or_default();

        self.chart_view
            .show(ui, &points, self.prefs.currency, self.is_chart_loading());
    }

    /// Error panel replacing main content; retry is a full in-app reload.
    fn render_error_view(&mut self, ui: &mut eframe::egui::Ui) {
        let message = self
            .last_error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default();

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("⚠ Unable to Load Market Data");
            ui.add_space(10.0);
            ui.label_error(message);
            ui.add_space(20.0);
            if ui.button("Reload").clicked() {
                self.reload();
            }
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new().inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("Source: {}", self.source.signature()));
                    ui.separator();
                    ui.label_subdued(format!(
                        "{} tracked / {} listed",
                        self.prefs.selected_coins.len(),
                        self.markets.len()
                    ));
                    ui.separator();
                    ui.label_subdued(format!(
                        "{} · {}",
                        self.prefs.currency.code(),
                        self.prefs.time_range
                    ));

                    if self.is_list_loading() || self.is_chart_loading() {
                        ui.separator();
                        ui.label(RichText::new("⟳ fetching").small());
                    }
                });
            });
    }
}
