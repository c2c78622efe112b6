use std::sync::Arc;

use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use crypto_dash::config::UI_CONFIG;
use crypto_dash::{run_app, Cli, MarketClient, MarketDataSource, PrefsStore};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    log::info!("Preferences file: {}", args.prefs.display());

    // C. Runtime + services. The runtime stays alive for the whole GUI
    // lifetime; fetch threads borrow its handle.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let handle = rt.handle().clone();

    let store = PrefsStore::new(args.prefs);
    let client = MarketClient::new().expect("Failed to create market data client");
    let source: Arc<dyn MarketDataSource> = Arc::new(client);

    // D. Run Native App
    let options = NativeOptions::default();
    eframe::run_native(
        UI_CONFIG.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, store, source, handle))),
    )
}
