use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// List bookmarked sites
    Sites {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one command line (as typed at the prompt) and print the result
    Exec {
        /// The line, e.g. `mkdir https://example.com ex`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
