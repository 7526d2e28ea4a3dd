use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod analysis;
mod cli;
mod config;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::Args;
use crate::config::Config;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init_logging(&config);
    config.log_rejected();
    log::info!("🔒 Starting passaudit");
    log::debug!("Loaded config: {:?}", config);

    if let Err(e) = run(args, &config) {
        log::error!("{}", e);
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    log::info!("✅ passaudit finished");
}

fn run(args: Args, config: &Config) -> Result<(), Box<dyn Error>> {
    if args.gui {
        log::info!("Launching form mode");
        return cli::form::run_form(config);
    }

    match args.command {
        Some(command) => cli::handlers::handle_command(command, config, args.json),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                if let Err(e) = ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Leaving menu...");
                    should_exit.store(true, Ordering::SeqCst);
                }) {
                    log::warn!("Failed to set Ctrl+C handler: {}", e);
                }
            }

            log::info!("Launching interactive CLI menu");
            cli::menu::run_cli_menu(config, should_exit)
        }
    }
}
