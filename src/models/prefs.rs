use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{DEFAULT_COINS, FALLBACK_COIN};

/// Display currency for all prices on the dashboard
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// Upper-cased code for headings ("USD")
    pub fn code(&self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Historical span requested for the chart
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    Week,
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    Month,
}

impl TimeRange {
    /// Day-count window passed to the market-chart endpoint
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "24 Hours",
            TimeRange::Week => "7 Days",
            TimeRange::Month => "30 Days",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// The single persisted record: source of truth for initial UI state.
///
/// Serialized field names match the JSON the original dashboard wrote, so an
/// existing preferences file keeps working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Tracked coin ids, insertion order meaningful for card display
    pub selected_coins: Vec<String>,
    /// The single coin whose history is charted
    pub selected_coin: String,
    pub currency: Currency,
    pub time_range: TimeRange,
    pub theme: Theme,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            selected_coins: DEFAULT_COINS.iter().map(|s| s.to_string()).collect(),
            selected_coin: FALLBACK_COIN.to_string(),
            currency: Currency::Usd,
            time_range: TimeRange::Week,
            theme: Theme::Dark,
        }
    }
}

/// Shallow-merge patch for incremental preference updates.
///
/// `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PrefsPatch {
    pub selected_coins: Option<Vec<String>>,
    pub selected_coin: Option<String>,
    pub currency: Option<Currency>,
    pub time_range: Option<TimeRange>,
    pub theme: Option<Theme>,
}

impl UserPreferences {
    pub fn merged(&self, patch: PrefsPatch) -> Self {
        Self {
            selected_coins: patch.selected_coins.unwrap_or_else(|| self.selected_coins.clone()),
            selected_coin: patch.selected_coin.unwrap_or_else(|| self.selected_coin.clone()),
            currency: patch.currency.unwrap_or(self.currency),
            time_range: patch.time_range.unwrap_or(self.time_range),
            theme: patch.theme.unwrap_or(self.theme),
        }
    }
}
