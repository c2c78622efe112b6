use eframe::egui::{self, RichText};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::chart::ChartDataPoint;
use crate::config::UI_CONFIG;
use crate::models::Currency;
use crate::ui::format::format_price;

/// Line chart of price over time for the active coin.
///
/// Presentation only: points arrive pre-projected, x is the sample index and
/// the date labels are resolved through the axis formatter and tooltip.
#[derive(Default)]
pub struct PriceChartView;

impl PriceChartView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        points: &[ChartDataPoint],
        currency: Currency,
        is_loading: bool,
    ) {
        ui.heading(format!("Price History ({})", currency.code()));
        ui.add_space(6.0);

        if is_loading {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.add_space(12.0);
                ui.label(RichText::new("Loading price history...").small());
                ui.add_space(40.0);
            });
            return;
        }

        if points.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No price history available for this window.");
                ui.add_space(40.0);
            });
            return;
        }

        let series: Vec<[f64; 2]> = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.price])
            .collect();
        let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();

        let legend = Legend::default().position(Corner::RightTop);
        let tooltip_labels = labels.clone();

        Plot::new("price_chart")
            .height(UI_CONFIG.chart_height)
            .legend(legend)
            .custom_x_axes(vec![create_x_axis(labels)])
            .custom_y_axes(vec![create_y_axis(currency)])
            .label_formatter(move |_, point| {
                let idx = point.x.round() as usize;
                let date = tooltip_labels
                    .get(idx)
                    .map(String::as_str)
                    .unwrap_or_default();
                format!("Date: {}\nPrice: {}", date, format_price(point.y, currency))
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new("Price", PlotPoints::new(series)));
            });
    }
}

fn create_x_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let idx = grid_mark.value.round();
        if idx < 0.0 || (grid_mark.value - idx).abs() > f64::EPSILON {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    })
}

fn create_y_axis(currency: Currency) -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(move |grid_mark, _range| format_price(grid_mark.value, currency))
        .placement(HPlacement::Left)
}
