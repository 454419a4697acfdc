use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub data_dir: PathBuf,
    /// Print search URLs into the scrollback instead of opening them.
    pub no_open: bool,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
