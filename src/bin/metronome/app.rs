//! App - keyboard control and the TUI event loop

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use saavy_metronome::{
    audio::AudioSink,
    engine::{Scheduler, Timer},
    sequencing::SubdivisionKind,
};

use super::ui::{self, View};

/// Longest wait between redraws (~60fps)
const FRAME: Duration = Duration::from_millis(16);

pub struct App<A, T> {
    scheduler: Scheduler<A, T>,
    /// Tick the accent keys act on
    cursor: usize,
    /// Last rejected action, shown in the help bar
    status: Option<String>,
    should_quit: bool,
}

impl<A: AudioSink, T: Timer> App<A, T> {
    pub fn new(scheduler: Scheduler<A, T>) -> Self {
        Self {
            scheduler,
            cursor: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.scheduler.poll();

            let view = View {
                snapshot: self.scheduler.snapshot(),
                cursor: self.cursor,
                status: self.status.as_deref(),
            };
            terminal.draw(|frame| ui::render(frame, &view))?;

            // Wake up for the next tick or the next frame, whichever is first
            let timeout = self
                .scheduler
                .time_until_tick()
                .map_or(FRAME, |until| until.min(FRAME));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.scheduler.stop();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        self.status = None;
        let time_signature = self.scheduler.grid().time_signature();
        let subdivision = self.scheduler.grid().subdivision();

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.scheduler.toggle(),
            KeyCode::Up => self.scheduler.nudge_bpm(1.0),
            KeyCode::Down => self.scheduler.nudge_bpm(-1.0),
            KeyCode::PageUp => self.scheduler.nudge_bpm(10.0),
            KeyCode::PageDown => self.scheduler.nudge_bpm(-10.0),
            KeyCode::Char('t') => self
                .scheduler
                .set_time_signature(time_signature.next_preset()),
            KeyCode::Char('T') => self
                .scheduler
                .set_time_signature(time_signature.previous_preset()),
            KeyCode::Char('s') => self.change_subdivision(subdivision.next_fitting(&time_signature)),
            KeyCode::Char('S') => {
                self.change_subdivision(subdivision.previous_fitting(&time_signature))
            }
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char('a') => {
                self.scheduler.toggle_accent(self.cursor);
            }
            _ => {}
        }

        // Grid changes can shrink the measure under the cursor
        let last = self.scheduler.grid().total_subdivisions().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }

    fn change_subdivision(&mut self, subdivision: SubdivisionKind) {
        if let Err(err) = self.scheduler.set_subdivision(subdivision) {
            tracing::debug!(%err, "subdivision rejected");
            self.status = Some(err.to_string());
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let total = self.scheduler.grid().total_subdivisions() as isize;
        if total == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(total) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saavy_metronome::{
        audio::SilentSink,
        engine::{IntervalTimer, ManualClock},
        sequencing::TimeSignature,
    };

    fn app() -> App<SilentSink, IntervalTimer<ManualClock>> {
        let timer = IntervalTimer::new(ManualClock::new());
        App::new(Scheduler::new(SilentSink::new(), timer))
    }

    #[test]
    fn space_starts_and_stops() {
        let mut app = app();
        app.handle_key(KeyCode::Char(' '));
        assert!(app.scheduler.is_playing());
        assert_eq!(app.scheduler.audio().clicks(), 1);

        app.handle_key(KeyCode::Char(' '));
        assert!(!app.scheduler.is_playing());
    }

    #[test]
    fn arrows_and_pages_change_tempo() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::PageUp);
        assert_eq!(app.scheduler.tempo().bpm(), 131.0);

        app.handle_key(KeyCode::PageDown);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.scheduler.tempo().bpm(), 119.0);
    }

    #[test]
    fn cursor_wraps_and_toggles_accents() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor, 3);

        app.handle_key(KeyCode::Char('a'));
        assert!(app.scheduler.accents().is_accented(3));

        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert!(!app.scheduler.accents().is_accented(0));
    }

    #[test]
    fn signature_change_clamps_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor, 3);

        // 4/4 back one preset is 3/4
        app.handle_key(KeyCode::Char('T'));
        assert_eq!(app.scheduler.grid().time_signature(), TimeSignature::THREE_FOUR);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn subdivision_keys_cycle() {
        let mut app = app();
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.scheduler.grid().subdivision(), SubdivisionKind::Eighth);
        assert!(app.status.is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
