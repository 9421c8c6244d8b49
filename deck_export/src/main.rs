use deck_export::ExportConfig;

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=deck_export=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Hearthstone Deck Export");

    let config = ExportConfig::load();
    if !ExportConfig::config_path().exists() {
        // first run: leave an editable config behind
        if let Err(e) = config.save() {
            log::warn!("Could not write default config: {e}");
        }
    }
    log::info!("Data directory: {}", config.data_dir.display());

    if let Err(e) = deck_export::ui::launch_gui(config) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
