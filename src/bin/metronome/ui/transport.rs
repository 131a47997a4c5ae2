//! Transport bar widget - shows BPM, play state, meter and position

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_metronome::engine::MetronomeSnapshot;

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, snapshot: &MetronomeSnapshot) {
    let block = Block::default().title(" metronome ").borders(Borders::ALL);

    let playing = snapshot.playback.is_playing;
    let play_symbol = if playing { "▶" } else { "■" };
    let play_state_str = if playing { "Playing" } else { "Stopped" };

    let position = match snapshot.playback.current_tick {
        Some(tick) => format!(
            "Bar {} | Tick {}/{}  ",
            snapshot.measures_elapsed + 1,
            tick + 1,
            snapshot.grid.total_subdivisions()
        ),
        None => format!("Bar - | Tick -/{}  ", snapshot.grid.total_subdivisions()),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" BPM: {:.0}  ", snapshot.tempo.bpm()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{play_symbol} {play_state_str}  "),
            Style::default().fg(if playing { Color::Green } else { Color::Yellow }),
        ),
        Span::styled(
            format!(
                "{}  {}  ",
                snapshot.grid.time_signature(),
                snapshot.grid.subdivision().label()
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(position, Style::default().fg(Color::White)),
        Span::styled(
            format!("{:.1} ms", snapshot.interval.as_secs_f64() * 1_000.0),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
