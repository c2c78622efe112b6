// User interface components
pub mod app;
pub mod app_fetch;
pub mod app_render;
pub mod app_state;
pub mod chart_view;
pub mod format;
pub mod panels;
pub mod styles;

#[cfg(test)]
mod test_support;

// Re-export main app
pub use app::DashboardApp;
