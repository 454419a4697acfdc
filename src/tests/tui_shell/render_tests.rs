use super::*;

#[test]
fn grid_fits_as_many_cells_as_width_allows() {
    // Longest name is 3 chars, so each cell is 7 wide.
    let names = ["gh", "hn", "yt", "abc", "x"];
    let rows = grid_rows(&names, 21);
    assert_eq!(rows, vec![vec!["gh", "hn", "yt"], vec!["abc", "x"]]);
}

#[test]
fn narrow_terminal_still_shows_one_per_row() {
    let names = ["a-very-long-name", "b"];
    let rows = grid_rows(&names, 5);
    assert_eq!(rows, vec![vec!["a-very-long-name"], vec!["b"]]);
}

#[test]
fn empty_grid_has_no_rows() {
    assert!(grid_rows(&[], 80).is_empty());
}

use std::cell::Cell;

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::registry::SITES_KEY;
use crate::store::MemoryStore;

#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    reads: Cell<usize>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value)
    }
}

fn draw_frames<S: KeyValueStore>(app: &App<S>, n: usize) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    for _ in 0..n {
        terminal.draw(|f| draw(f, app)).unwrap();
    }
}

#[test]
fn idle_frames_do_not_touch_the_store() {
    let store = CountingStore::default();
    store
        .inner
        .set(SITES_KEY, r#"[{"name":"gh","url":"https://github.com"}]"#)
        .unwrap();
    let app = App::new(Shell::new(&store, HostFacts::default()), true);
    assert_eq!(store.reads.get(), 1);

    draw_frames(&app, 20);
    assert_eq!(store.reads.get(), 1);
    assert_eq!(app.sites, vec![Site::new("gh", "https://github.com")]);
}

#[test]
fn malformed_store_is_read_once_while_idle() {
    let store = CountingStore::default();
    store.inner.set(SITES_KEY, "{not json").unwrap();
    let app = App::new(Shell::new(&store, HostFacts::default()), true);

    draw_frames(&app, 20);
    assert_eq!(store.reads.get(), 1);
    assert!(app.sites.is_empty());
}

#[test]
fn submitted_commands_and_ticks_refresh_the_grid() {
    let store = CountingStore::default();
    let mut app = App::new(Shell::new(&store, HostFacts::default()), true);

    for c in "mkdir https://a.com a".chars() {
        app.edit(EditEvent::KeyPress(c));
    }
    app.edit(EditEvent::Enter);
    assert_eq!(app.sites, vec![Site::new("a", "https://a.com")]);

    store
        .inner
        .set(SITES_KEY, r#"[{"name":"b","url":"https://b.com"}]"#)
        .unwrap();
    app.tick();
    assert_eq!(app.sites, vec![Site::new("b", "https://b.com")]);
}

#[test]
fn huge_paste_does_not_wrap_layout_sizes() {
    assert_eq!(to_u16(70_000), u16::MAX);
    assert_eq!(to_u16(12), 12);

    let mut app = App::new(Shell::new(MemoryStore::new(), HostFacts::default()), true);
    app.edit(EditEvent::Paste("x".repeat(70_000)));
    draw_frames(&app, 1);
}
