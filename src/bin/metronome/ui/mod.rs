//! TUI module for the metronome
//!
//! Stateless: every frame is drawn from a [`View`] built by the app.

mod beats;
mod transport;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_metronome::engine::MetronomeSnapshot;

use beats::render_beats;
use transport::render_transport;

const HELP: &str = " [Space] Start/Stop  [↑↓/PgUp PgDn] BPM  [t/T] Meter  [s/S] Subdivision  [←→] Cursor  [a/Enter] Accent  [Q] Quit";

/// What one frame shows
pub struct View<'a> {
    pub snapshot: MetronomeSnapshot,
    /// Tick the accent keys act on
    pub cursor: usize,
    /// Message replacing the help bar
    pub status: Option<&'a str>,
}

/// Render the UI
pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();

    // Main layout: transport, beats, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Min(5),    // Beat row
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_transport(frame, chunks[0], &view.snapshot);

    let beats_block = Block::default().title(" Measure ").borders(Borders::ALL);
    let beats_inner = beats_block.inner(chunks[1]);
    frame.render_widget(beats_block, chunks[1]);
    render_beats(frame, beats_inner, &view.snapshot, view.cursor);

    let help = match view.status {
        Some(status) => Paragraph::new(format!(" {status}")).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(help, chunks[2]);
}
