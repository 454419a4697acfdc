use super::*;

const GRID_GAP: usize = 4;

pub(super) fn draw<S: KeyValueStore>(frame: &mut ratatui::Frame, app: &App<S>) {
    let area = frame.area();
    let input_lines = to_u16(app.editor.buffer().split('\n').count());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(site_panel_height(&app.sites, area.width)),
            Constraint::Min(0),
            Constraint::Length(input_lines.saturating_add(1)),
            Constraint::Length(if app.status.is_some() { 1 } else { 0 }),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_sites(frame, &app.sites, chunks[1]);
    draw_log(frame, app, chunks[2]);
    draw_input(frame, app, chunks[3]);

    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )),
            chunks[4],
        );
    }
}

fn draw_header<S: KeyValueStore>(frame: &mut ratatui::Frame, app: &App<S>, area: Rect) {
    let spans = vec![
        Span::styled(
            "kabutor",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            clock::fmt_time(app.now),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(clock::fmt_date(app.now), Style::default().fg(Color::Gray)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn site_panel_height(sites: &[Site], width: u16) -> u16 {
    if sites.is_empty() {
        return 5;
    }
    let names = sites.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    to_u16(grid_rows(&names, width as usize).len()).saturating_add(2)
}

fn draw_sites(frame: &mut ratatui::Frame, sites: &[Site], area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM).title("Sites");

    if sites.is_empty() {
        let hint = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(Span::styled("No sites yet. Add one with:", hint)),
            Line::from(Span::styled(
                "  mkdir https://example.com example",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled("Type `help` to see every command.", hint)),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let names = sites.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    let cell = cell_width(&names);
    let link = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);
    let lines = grid_rows(&names, area.width as usize)
        .into_iter()
        .map(|row| {
            let spans = row
                .into_iter()
                .flat_map(|name| {
                    let pad = cell.saturating_sub(name.chars().count());
                    [Span::styled(name, link), Span::raw(" ".repeat(pad))]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_log<S: KeyValueStore>(frame: &mut ratatui::Frame, app: &App<S>, area: Rect) {
    let lines = app
        .shell
        .log()
        .iter()
        .map(|entry| match entry.kind {
            EntryKind::Command => Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(Color::Green)),
                Span::raw(" "),
                Span::raw(entry.text.as_str()),
            ]),
            EntryKind::Output => Line::from(Span::raw(entry.text.as_str())),
            EntryKind::Success => Line::from(Span::styled(
                entry.text.as_str(),
                Style::default().fg(Color::Green),
            )),
            EntryKind::Error => Line::from(Span::styled(
                entry.text.as_str(),
                Style::default().fg(Color::Red),
            )),
        })
        .collect::<Vec<_>>();

    // Keep the newest lines in view.
    let skip = lines.len().saturating_sub(area.height as usize);
    let visible = lines.into_iter().skip(skip).collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(visible).wrap(Wrap { trim: false }), area);
}

fn draw_input<S: KeyValueStore>(frame: &mut ratatui::Frame, app: &App<S>, area: Rect) {
    let prompt_style = Style::default().fg(Color::Green);
    let mut lines = Vec::new();
    for (i, part) in app.editor.buffer().split('\n').enumerate() {
        let lead = if i == 0 {
            Span::styled(PROMPT, prompt_style)
        } else {
            Span::raw(" ".repeat(PROMPT.len()))
        };
        lines.push(Line::from(vec![lead, Span::raw(" "), Span::raw(part)]));
    }
    let last = app.editor.buffer().rsplit('\n').next().unwrap_or("");

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );

    let x = to_u16(PROMPT.len() + 1 + last.chars().count());
    let y = area.y + area.height.saturating_sub(1);
    frame.set_cursor_position((area.x + x.min(area.width.saturating_sub(1)), y));
}

pub(super) fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn cell_width(names: &[&str]) -> usize {
    names.iter().map(|n| n.chars().count()).max().unwrap_or(0) + GRID_GAP
}

/// Splits names into rows of as many fixed-width cells as fit in `width`.
pub(super) fn grid_rows<'a>(names: &[&'a str], width: usize) -> Vec<Vec<&'a str>> {
    let cols = (width / cell_width(names).max(1)).max(1);
    names.chunks(cols).map(|row| row.to_vec()).collect()
}

#[cfg(test)]
#[path = "../../tests/tui_shell/render_tests.rs"]
mod tests;
