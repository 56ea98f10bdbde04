use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const CURRENCY_ENV: &str = "BUDGETDASH_CURRENCY";
pub(crate) const DEFAULT_CURRENCY: &str = "$";
pub(crate) const DEFAULT_LOG_FILTER: &str = "budgetdash=info";

/// Startup settings, resolved once from the environment and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) currency_symbol: String,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) start_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_file: None,
            start_empty: false,
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(symbol) = std::env::var(CURRENCY_ENV) {
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                config.currency_symbol = symbol.to_string();
            }
        }
        config
    }

    /// Strips the global flags (`--log-file <path>`, `--empty`) out of `args`,
    /// leaving the command and its own arguments behind.
    pub(crate) fn apply_flags(&mut self, args: &[String]) -> Result<Vec<String>> {
        let mut rest = Vec::with_capacity(args.len());
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--log-file" => {
                    let path = iter.next().context("--log-file requires a path")?;
                    self.log_file = Some(PathBuf::from(path));
                }
                "--empty" => self.start_empty = true,
                _ => rest.push(arg.clone()),
            }
        }
        Ok(rest)
    }

    /// Where the TUI writes its log: the `--log-file` override, or
    /// `budgetdash.log` in the platform's local data directory.
    pub(crate) fn tui_log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        directories::ProjectDirs::from("com", "budgetdash", "BudgetDash")
            .map(|dirs| dirs.data_local_dir().join("budgetdash.log"))
    }
}
