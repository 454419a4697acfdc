//! Command-line grammar: the first whitespace-separated token picks the command.

pub const SEARCH_URL_PREFIX: &str = "https://duckduckgo.com/?q=";

pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  mkdir <url> <name>  - Add a new site",
    "  rm -rf <name>       - Remove a site",
    "  clear               - Clear command history",
    "  kabufetch           - Show system info",
    "  help                - Show this help",
    "  Type any text and press Enter to search",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Mkdir { url: String, name: String },
    Remove { name: String },
    Clear,
    Fetch,
    Help,
    Search(String),
    Empty,
}

impl Command {
    /// Commands that echo the raw input into the scrollback before running.
    pub fn echoes(&self) -> bool {
        matches!(
            self,
            Command::Mkdir { .. } | Command::Remove { .. } | Command::Fetch | Command::Help
        )
    }
}

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let Some(&cmd) = tokens.first() else {
        return Command::Empty;
    };

    match (cmd, tokens.as_slice()) {
        ("mkdir", [_, url, name]) => Command::Mkdir {
            url: url.to_string(),
            name: name.to_string(),
        },
        ("rm", [_, "-rf", name]) => Command::Remove {
            name: name.to_string(),
        },
        ("clear", _) => Command::Clear,
        ("kabufetch", _) => Command::Fetch,
        ("help", _) => Command::Help,
        _ => Command::Search(line.to_string()),
    }
}

pub fn search_url(query: &str) -> String {
    format!("{}{}", SEARCH_URL_PREFIX, urlencoding::encode(query))
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
