use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

mod key_dispatch;

pub(super) use key_dispatch::{KeyAction, map_key};

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut last_tick = Instant::now();
    let tick_interval = Duration::from_secs(1);
    loop {
        if last_tick.elapsed() >= tick_interval {
            app.tick();
            last_tick = Instant::now();
        }

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            info!("start page closed");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => match map_key(k) {
                    KeyAction::Edit(ev) => app.edit(ev),
                    KeyAction::Quit => app.quit = true,
                    KeyAction::Ignore => {}
                },
                Event::Paste(text) => app.edit(EditEvent::Paste(text)),
                Event::Resize(cols, rows) => app.resized(cols, rows),
                _ => {}
            }
        }
    }
}
