//! UI layout and copy configuration

/// Main UI configuration struct that holds all UI-related settings
pub struct UiConfig {
    /// Window title shown by the native frame
    pub window_title: &'static str,
    /// Heading rendered at the top of the dashboard
    pub page_title: &'static str,
    pub page_subtitle: &'static str,
    /// Maximum number of quick-add buttons shown in the controls panel
    pub quick_add_preview: usize,
    /// Cards rendered per grid row
    pub cards_per_row: usize,
    pub chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    window_title: "Crypto Dash",
    page_title: "Cryptocurrency Dashboard",
    page_subtitle: "Market data and interactive price charts",
    quick_add_preview: 6,
    cards_per_row: 3,
    chart_height: 400.0,
};
