use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::clock;
use crate::editor::{self, EditEvent, EditorState};
use crate::fetch::HostFacts;
use crate::model::Site;
use crate::shell::{EntryKind, Navigation, PROMPT, Shell};
use crate::store::{FileStore, KeyValueStore};
use crate::tui::TuiRunOptions;

mod event_loop;
mod render;
mod runtime;

pub(super) use self::runtime::run;

pub(in crate::tui_shell) struct App<S = FileStore> {
    pub(in crate::tui_shell) shell: Shell<S>,
    /// Grid contents, re-read from the store after commands and on the clock tick
    /// rather than on every frame.
    pub(in crate::tui_shell) sites: Vec<Site>,
    pub(in crate::tui_shell) editor: EditorState,
    pub(in crate::tui_shell) no_open: bool,
    pub(in crate::tui_shell) now: OffsetDateTime,
    /// One-line notice under the prompt (search target, opener failures).
    pub(in crate::tui_shell) status: Option<String>,
    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn load(opts: &TuiRunOptions) -> Result<Self> {
        let store = FileStore::open(&opts.data_dir)?;
        let mut host = HostFacts::detect();
        host.resolution = crossterm::terminal::size().ok();
        info!(data_dir = %opts.data_dir.display(), "start page opened");

        Ok(Self::new(Shell::new(store, host), opts.no_open))
    }
}

impl<S: KeyValueStore> App<S> {
    pub(in crate::tui_shell) fn new(shell: Shell<S>, no_open: bool) -> Self {
        let sites = shell.sites();
        Self {
            shell,
            sites,
            editor: EditorState::default(),
            no_open,
            now: clock::now(),
            status: None,
            quit: false,
        }
    }

    /// Picks up edits made outside this session (e.g. `kabutor exec`).
    pub(in crate::tui_shell) fn tick(&mut self) {
        self.now = clock::now();
        self.sites = self.shell.sites();
    }

    pub(in crate::tui_shell) fn resized(&mut self, cols: u16, rows: u16) {
        self.shell.host_mut().resolution = Some((cols, rows));
    }

    pub(in crate::tui_shell) fn edit(&mut self, ev: EditEvent) {
        let state = std::mem::take(&mut self.editor);
        let t = editor::apply(state, ev);
        self.editor = t.state;

        if let Some(line) = t.submitted {
            self.status = None;
            let nav = self.shell.run_line(&line);
            self.sites = self.shell.sites();
            if let Some(nav) = nav {
                self.navigate(nav);
            }
        }
    }

    fn navigate(&mut self, nav: Navigation) {
        if self.no_open {
            self.status = Some(format!("search: {}", nav.url));
            return;
        }
        match crate::navigate::system_open(&nav.url) {
            Ok(()) => self.status = Some(format!("opened {}", nav.url)),
            Err(err) => {
                warn!(url = %nav.url, error = %format!("{:#}", err), "open failed");
                self.status = Some(format!("open failed: {:#} ({})", err, nav.url));
            }
        }
    }
}
