//! Beat row widget - one cell per tick with playhead and accent cursor

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use saavy_metronome::{engine::MetronomeSnapshot, sequencing::Click};

const MIN_CELL: u16 = 3;
const MAX_CELL: u16 = 8;

/// Render the tick cells for one measure
pub fn render_beats(frame: &mut Frame, area: Rect, snapshot: &MetronomeSnapshot, cursor: usize) {
    let grid = &snapshot.grid;
    let total = grid.total_subdivisions();
    if area.height < 3 || total == 0 {
        return;
    }

    let cell = (area.width / total as u16).clamp(MIN_CELL, MAX_CELL) as usize;
    let current = snapshot.playback.current_tick;

    let mut numbers = Vec::with_capacity(total);
    let mut cells = Vec::with_capacity(total);
    let mut markers = Vec::with_capacity(total);

    for tick in 0..total {
        // Beat number on the first tick of each beat
        let beat = grid.beat_of(tick);
        let label = if tick == 0 || grid.beat_of(tick - 1) != beat {
            (beat + 1).to_string()
        } else {
            String::new()
        };
        numbers.push(Span::styled(
            format!("{label:<cell$}"),
            Style::default().fg(Color::DarkGray),
        ));

        let (glyph, mut style) = match snapshot.click_at(tick) {
            Some(Click::Accent) => (
                '█',
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Some(Click::Regular) => ('▓', Style::default().fg(Color::White)),
            None => ('·', Style::default().fg(Color::DarkGray)),
        };
        if current == Some(tick) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        let body: String = std::iter::repeat(glyph).take(cell - 1).collect();
        cells.push(Span::styled(body, style));
        cells.push(Span::raw(" "));

        let marker = if tick == cursor { "^" } else { " " };
        markers.push(Span::styled(
            format!("{marker:<cell$}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(vec![
        Line::from(numbers),
        Line::from(cells),
        Line::from(markers),
    ]);
    frame.render_widget(paragraph, area);
}
