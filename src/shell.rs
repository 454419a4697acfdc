//! Dispatches submitted lines against the site registry and keeps the
//! scrollback log the display renders.

use std::time::Instant;

use tracing::{debug, info};

use crate::command::{self, Command, HELP_LINES};
use crate::fetch::{self, HostFacts};
use crate::model::Site;
use crate::registry::SiteRegistry;
use crate::store::KeyValueStore;

pub const PROMPT: &str = "[kabutor ~]#";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Output,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Full-page navigation requested by the search fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

pub struct Shell<S> {
    registry: SiteRegistry<S>,
    log: Vec<ScrollEntry>,
    host: HostFacts,
    started: Instant,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(store: S, host: HostFacts) -> Self {
        Self {
            registry: SiteRegistry::new(store),
            log: Vec::new(),
            host,
            started: Instant::now(),
        }
    }

    pub fn sites(&self) -> Vec<Site> {
        self.registry.list()
    }

    pub fn log(&self) -> &[ScrollEntry] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn host_mut(&mut self) -> &mut HostFacts {
        &mut self.host
    }

    pub fn run_line(&mut self, line: &str) -> Option<Navigation> {
        let cmd = command::parse(line);
        if cmd.echoes() {
            self.push(EntryKind::Command, line.trim().to_string());
        }
        debug!(?cmd, "dispatch");

        match cmd {
            Command::Empty => {}
            Command::Mkdir { url, name } => match self.registry.add(&url, &name) {
                Ok(site) => {
                    info!(name = %site.name, url = %site.url, "site created");
                    self.push(
                        EntryKind::Success,
                        format!("mkdir: created site '{}'", name),
                    );
                }
                Err(err) => self.push(EntryKind::Error, err.to_string()),
            },
            Command::Remove { name } => match self.registry.remove(&name) {
                Ok(site) => {
                    info!(name = %site.name, "site removed");
                    self.push(EntryKind::Success, format!("rm: removed site '{}'", name));
                }
                Err(err) => self.push(EntryKind::Error, err.to_string()),
            },
            Command::Clear => self.clear_log(),
            Command::Fetch => {
                let rows = fetch::render(
                    &self.host,
                    self.registry.list().len(),
                    self.started.elapsed(),
                );
                for row in rows {
                    self.push(EntryKind::Output, row);
                }
            }
            Command::Help => {
                for l in HELP_LINES {
                    self.push(EntryKind::Output, l.to_string());
                }
            }
            Command::Search(query) => {
                let url = command::search_url(&query);
                info!(%url, "search");
                return Some(Navigation { url });
            }
        }
        None
    }

    fn push(&mut self, kind: EntryKind, text: String) {
        self.log.push(ScrollEntry { kind, text });
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
