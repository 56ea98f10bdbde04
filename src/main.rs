mod config;
mod logging;
mod models;
mod run;
mod store;
mod summary;
mod ui;

use anyhow::Result;

use config::Config;
use models::StaticBudgetTable;
use store::TransactionStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::from_env();
    let args = config.apply_flags(&args)?;

    let store = if config.start_empty {
        TransactionStore::new()
    } else {
        TransactionStore::seeded()
    };
    let limits = StaticBudgetTable::default();

    match args.len() {
        0 | 1 => {
            init_tui_logging(&config);
            tracing::debug!(?config, "starting dashboard");
            let app = ui::app::App::new(store, Box::new(limits), config.currency_symbol);
            run::as_tui(app)
        }
        _ => {
            logging::init_stderr();
            tracing::debug!(?config, "running command");
            run::as_cli(&args, &store, &limits, &config.currency_symbol)
        }
    }
}

/// The dashboard owns the terminal, so logs go to a file. A log file that
/// cannot be opened only costs us the log.
fn init_tui_logging(config: &Config) {
    if let Some(path) = config.tui_log_path() {
        if let Err(e) = logging::init_file(&path) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }
}
