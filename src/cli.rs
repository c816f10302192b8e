use std::io;
use std::path::PathBuf;

use clap::Parser;
use rental_space::config::AppConfig;
use rental_space::console::Console;
use rental_space::error::AppError;
use rental_space::menu::MenuController;
use rental_space::store::CsvStore;
use rental_space::telemetry;
use rental_space::workflows::RentalSession;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Monash Rental Space",
    about = "Browse, wishlist and apply for rental properties from the terminal",
    version
)]
struct Cli {
    /// Directory holding tenant.csv, property.csv, application.csv and wishlist.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Override the configured log filter (e.g. `info` or `rental_space=debug`)
    #[arg(long)]
    log_level: Option<String>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(log_level) = cli.log_level {
        config.telemetry.log_level = log_level;
    }

    telemetry::init(&config.telemetry)?;
    info!(data_dir = %config.storage.data_dir.display(), "starting rental console");

    let session = RentalSession::open(CsvStore::new(config.storage.data_dir));
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    MenuController::new(session, console).run()?;
    Ok(())
}
