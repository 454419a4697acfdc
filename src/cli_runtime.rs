use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::Commands;

#[derive(Parser)]
#[command(name = "kabutor")]
#[command(about = "Terminal-style start page with bookmarks and search", long_about = None)]
pub(crate) struct Cli {
    /// Where sites and logs are kept
    #[arg(long = "data-dir", value_name = "PATH", env = "KABUTOR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Show search URLs instead of opening them in a browser
    #[arg(long = "no-open")]
    no_open: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let _logging = kabutor::logging::init(&data_dir);

    match cli.command {
        None => {
            kabutor::tui::run_with_options(kabutor::tui::TuiRunOptions {
                data_dir,
                no_open: cli.no_open,
            })?;
        }
        Some(command) => crate::cli_exec::handle_command(command, &data_dir, cli.no_open)?,
    }

    Ok(())
}

fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join("kabutor"));
    }
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .context("cannot locate home directory (pass --data-dir)")?;
    Ok(PathBuf::from(home).join(".local/share/kabutor"))
}
