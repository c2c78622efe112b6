//! Projection of raw price history into display-ready chart points.

use chrono::DateTime;

use crate::models::PriceHistory;

/// Date format used for axis labels and tooltips
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// One display-projected sample: a date label plus the raw price.
/// Transient, recomputed on every chart render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataPoint {
    pub label: String,
    pub price: f64,
}

/// Maps price samples 1:1 to chart points, preserving order. No
/// interpolation, smoothing or gap filling.
pub fn chart_points(history: &PriceHistory) -> Vec<ChartDataPoint> {
    history
        .prices
        .iter()
        .map(|&(timestamp_ms, price)| ChartDataPoint {
            label: epoch_ms_to_label(timestamp_ms),
            price,
        })
        .collect()
}

fn epoch_ms_to_label(epoch_ms: f64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms as i64) {
        Some(dt) => dt.format(DATE_LABEL_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_map_one_to_one_and_preserve_order() {
        let history = PriceHistory {
            prices: vec![
                (1_700_000_000_000.0, 42_000.0),
                (1_700_086_400_000.0, 42_500.0),
                (1_700_172_800_000.0, 41_800.0),
            ],
            market_caps: vec![],
            total_volumes: vec![],
        };

        let points = chart_points(&history);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].price, 42_000.0);
        assert_eq!(points[1].price, 42_500.0);
        assert_eq!(points[2].price, 41_800.0);
    }

    #[test]
    fn labels_are_formatted_dates() {
        // 2023-11-14T22:13:20Z
        let history = PriceHistory {
            prices: vec![(1_700_000_000_000.0, 1.0)],
            market_caps: vec![],
            total_volumes: vec![],
        };

        let points = chart_points(&history);
        assert_eq!(points[0].label, "2023-11-14");
    }

    #[test]
    fn empty_history_yields_no_points() {
        assert!(chart_points(&PriceHistory::default()).is_empty());
    }
}
