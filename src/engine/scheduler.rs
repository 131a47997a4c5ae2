//! Scheduler - the metronome's beat clock
//!
//! Owns the beat grid, tempo, accents and the tick counter. A [`Timer`]
//! paces it and an [`AudioSink`] makes the sound; both are injected so the
//! scheduler runs the same against a real clock or a manual one.

use std::time::Duration;

use crate::{
    audio::AudioSink,
    sequencing::{AccentSet, BeatGrid, Click, MeterError, SubdivisionKind, Tempo, TimeSignature},
};

use super::timer::Timer;

/// Whether the metronome is running and which tick is current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Tick being highlighted, `None` while stopped
    pub current_tick: Option<usize>,
}

/// Everything a front end needs to draw the metronome
#[derive(Debug, Clone, PartialEq)]
pub struct MetronomeSnapshot {
    pub tempo: Tempo,
    /// Signature, subdivision and tick count
    pub grid: BeatGrid,
    pub accents: AccentSet,
    pub playback: PlaybackState,
    pub interval: Duration,
    /// Completed measures since the last start
    pub measures_elapsed: u64,
}

impl MetronomeSnapshot {
    /// What tick `tick` sounds like under this configuration.
    pub fn click_at(&self, tick: usize) -> Option<Click> {
        self.grid.click_at(tick, &self.accents)
    }
}

/// Beat clock driving an [`AudioSink`] from a [`Timer`]
pub struct Scheduler<A, T> {
    grid: BeatGrid,
    tempo: Tempo,
    accents: AccentSet,
    current_tick: Option<usize>,
    measures_elapsed: u64,
    audio: A,
    timer: T,
}

impl<A: AudioSink, T: Timer> Scheduler<A, T> {
    /// Create a stopped scheduler at 120 bpm in 4/4 quarters.
    pub fn new(audio: A, timer: T) -> Self {
        let grid = BeatGrid::default();
        Self {
            accents: AccentSet::downbeat(grid.total_subdivisions()),
            grid,
            tempo: Tempo::default(),
            current_tick: None,
            measures_elapsed: 0,
            audio,
            timer,
        }
    }

    /// Start from a given grid and tempo.
    pub fn with_grid(mut self, grid: BeatGrid, tempo: Tempo) -> Self {
        self.stop();
        self.grid = grid;
        self.tempo = tempo;
        self.accents = AccentSet::downbeat(grid.total_subdivisions());
        self
    }

    pub fn is_playing(&self) -> bool {
        self.current_tick.is_some()
    }

    pub fn playback(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.is_playing(),
            current_tick: self.current_tick,
        }
    }

    pub fn grid(&self) -> &BeatGrid {
        &self.grid
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn accents(&self) -> &AccentSet {
        &self.accents
    }

    pub fn interval(&self) -> Duration {
        self.grid.interval(self.tempo)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Stopped → Running at tick 0. Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_playing() {
            return;
        }

        self.current_tick = Some(0);
        self.measures_elapsed = 0;
        self.sound(0);
        self.timer.arm(self.interval());

        tracing::info!(
            bpm = self.tempo.bpm(),
            time_signature = %self.grid.time_signature(),
            subdivision = %self.grid.subdivision(),
            "metronome started"
        );
    }

    /// Running → Stopped. Does nothing if already stopped.
    pub fn stop(&mut self) {
        if !self.is_playing() {
            return;
        }

        self.timer.disarm();
        self.current_tick = None;
        tracing::info!("metronome stopped");
    }

    /// Start if stopped, stop if running.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance one tick. Called on every timer fire; ignored while stopped.
    pub fn tick(&mut self) {
        let Some(current) = self.current_tick else {
            return;
        };

        let next = self.grid.next_tick(current);
        if next == 0 {
            self.measures_elapsed += 1;
        }
        self.sound(next);
        self.current_tick = Some(next);
    }

    /// Tick if the timer has fired since the last poll. Returns whether it did.
    pub fn poll(&mut self) -> bool {
        if self.timer.poll() {
            self.tick();
            true
        } else {
            false
        }
    }

    /// Time until the next tick is due, `None` while stopped.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Change tempo. A running metronome keeps its place and continues at the
    /// new interval from now.
    pub fn set_bpm(&mut self, bpm: f64) {
        let tempo = Tempo::new(bpm);
        if tempo == self.tempo {
            return;
        }

        self.tempo = tempo;
        if self.is_playing() {
            self.timer.arm(self.interval());
        }
        tracing::debug!(bpm = tempo.bpm(), "tempo changed");
    }

    /// Move tempo by `delta` bpm.
    pub fn nudge_bpm(&mut self, delta: f64) {
        self.set_bpm(self.tempo.bpm() + delta);
    }

    /// Change time signature.
    ///
    /// Accents reset to the downbeat and a running metronome stops. If the
    /// current subdivision does not divide the new measure, the grid falls
    /// back to counting the signature's beat unit.
    pub fn set_time_signature(&mut self, time_signature: TimeSignature) {
        let grid = BeatGrid::new(time_signature, self.grid.subdivision()).unwrap_or_else(|_| {
            tracing::debug!(
                %time_signature,
                subdivision = %self.grid.subdivision(),
                "subdivision does not fit, counting beat unit"
            );
            BeatGrid::beat_unit(time_signature)
        });
        self.replace_grid(grid);
    }

    /// Change subdivision.
    ///
    /// Rejected with [`MeterError::Incompatible`] (leaving everything as it
    /// was) if the subdivision does not divide the current measure. Otherwise
    /// accents reset to the downbeat and a running metronome stops.
    pub fn set_subdivision(&mut self, subdivision: SubdivisionKind) -> Result<(), MeterError> {
        let grid = BeatGrid::new(self.grid.time_signature(), subdivision)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Flip the accent at `index`. Returns false if `index` is outside the measure.
    pub fn toggle_accent(&mut self, index: usize) -> bool {
        if index >= self.grid.total_subdivisions() {
            return false;
        }
        self.accents = self.accents.toggled(index);
        true
    }

    /// Copy of the state for rendering.
    pub fn snapshot(&self) -> MetronomeSnapshot {
        MetronomeSnapshot {
            tempo: self.tempo,
            grid: self.grid,
            accents: self.accents.clone(),
            playback: self.playback(),
            interval: self.interval(),
            measures_elapsed: self.measures_elapsed,
        }
    }

    fn replace_grid(&mut self, grid: BeatGrid) {
        if grid == self.grid {
            return;
        }

        // Old tick indices mean nothing in the new measure
        self.stop();
        self.grid = grid;
        self.accents = AccentSet::downbeat(grid.total_subdivisions());
        tracing::debug!(
            time_signature = %grid.time_signature(),
            subdivision = %grid.subdivision(),
            ticks = grid.total_subdivisions(),
            "beat grid changed"
        );
    }

    fn sound(&mut self, tick: usize) {
        let Some(click) = self.grid.click_at(tick, &self.accents) else {
            return;
        };

        if let Err(err) = self.audio.play_click(click.is_accent()) {
            tracing::warn!(tick, %err, "click playback failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::AudioError,
        engine::{clock::ManualClock, timer::IntervalTimer},
    };

    #[derive(Default)]
    struct RecordingSink {
        clicks: Vec<bool>,
        fail: bool,
    }

    impl AudioSink for RecordingSink {
        fn play_click(&mut self, accented: bool) -> Result<(), AudioError> {
            self.clicks.push(accented);
            if self.fail {
                Err(AudioError::QueueFull)
            } else {
                Ok(())
            }
        }
    }

    fn scheduler() -> (Scheduler<RecordingSink, IntervalTimer<ManualClock>>, ManualClock) {
        let clock = ManualClock::new();
        let timer = IntervalTimer::new(clock.clone());
        (Scheduler::new(RecordingSink::default(), timer), clock)
    }

    #[test]
    fn start_plays_accented_downbeat() {
        let (mut metronome, _) = scheduler();
        metronome.start();

        assert_eq!(metronome.playback().current_tick, Some(0));
        assert_eq!(metronome.audio().clicks, vec![true]);
        assert_eq!(
            metronome.timer().interval(),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let (mut metronome, _) = scheduler();
        metronome.start();
        metronome.tick();
        metronome.start();

        assert_eq!(metronome.playback().current_tick, Some(1));
        assert_eq!(metronome.audio().clicks.len(), 2);
    }

    #[test]
    fn full_measure_wraps_to_start() {
        let (mut metronome, _) = scheduler();
        metronome
            .set_subdivision(SubdivisionKind::Sixteenth)
            .unwrap();
        metronome.start();

        let total = metronome.grid().total_subdivisions();
        for _ in 0..total {
            metronome.tick();
        }
        assert_eq!(metronome.playback().current_tick, Some(0));
        assert_eq!(metronome.snapshot().measures_elapsed, 1);
    }

    #[test]
    fn compound_pattern_skips_silent_slots() {
        let (mut metronome, _) = scheduler();
        metronome
            .set_subdivision(SubdivisionKind::EighthSixteenthSixteenth)
            .unwrap();
        metronome.start();
        for _ in 0..7 {
            metronome.tick();
        }

        // ticks 0..8 sound at 0, 2, 3, 4, 6, 7; only 0 is accented
        assert_eq!(
            metronome.audio().clicks,
            vec![true, false, false, false, false, false]
        );
    }

    #[test]
    fn stop_resets_tick_and_disarms() {
        let (mut metronome, clock) = scheduler();
        metronome.start();
        metronome.stop();

        assert_eq!(metronome.playback(), PlaybackState::default());
        assert!(!metronome.timer().is_armed());

        clock.advance(Duration::from_secs(5));
        assert!(!metronome.poll());
        metronome.tick();
        assert_eq!(metronome.playback().current_tick, None);
    }

    #[test]
    fn poll_ticks_on_timer_fire() {
        let (mut metronome, clock) = scheduler();
        metronome.start();

        clock.advance(Duration::from_millis(499));
        assert!(!metronome.poll());
        clock.advance(Duration::from_millis(1));
        assert!(metronome.poll());
        assert_eq!(metronome.playback().current_tick, Some(1));
    }

    #[test]
    fn bpm_change_keeps_position_and_rearms() {
        let (mut metronome, clock) = scheduler();
        metronome.start();
        metronome.tick();
        metronome.tick();

        metronome.set_bpm(60.0);
        assert_eq!(metronome.playback().current_tick, Some(2));
        assert_eq!(metronome.timer().interval(), Some(Duration::from_secs(1)));

        clock.advance(Duration::from_millis(999));
        assert!(!metronome.poll());
        clock.advance(Duration::from_millis(1));
        assert!(metronome.poll());
        assert_eq!(metronome.playback().current_tick, Some(3));
    }

    #[test]
    fn bpm_is_clamped() {
        let (mut metronome, _) = scheduler();
        metronome.set_bpm(1_000.0);
        assert_eq!(metronome.tempo().bpm(), 300.0);
        metronome.nudge_bpm(-500.0);
        assert_eq!(metronome.tempo().bpm(), 20.0);
    }

    #[test]
    fn time_signature_change_while_running_stops_and_resets_accents() {
        let (mut metronome, _) = scheduler();
        metronome.toggle_accent(2);
        metronome.start();
        metronome.tick();

        metronome.set_time_signature(TimeSignature::THREE_FOUR);

        let snapshot = metronome.snapshot();
        assert_eq!(snapshot.playback.current_tick, None);
        assert!(!snapshot.playback.is_playing);
        assert_eq!(snapshot.accents, AccentSet::downbeat(3));
        assert!(!metronome.timer().is_armed());
    }

    #[test]
    fn time_signature_change_falls_back_to_beat_unit() {
        let (mut metronome, _) = scheduler();
        metronome.set_time_signature(TimeSignature::SEVEN_EIGHT);

        assert_eq!(metronome.grid().subdivision(), SubdivisionKind::Eighth);
        assert_eq!(metronome.grid().total_subdivisions(), 7);
    }

    #[test]
    fn incompatible_subdivision_is_rejected() {
        let (mut metronome, _) = scheduler();
        metronome.set_time_signature(TimeSignature::THREE_FOUR);
        metronome.toggle_accent(1);
        metronome.start();

        let result = metronome.set_subdivision(SubdivisionKind::Whole);
        assert!(matches!(result, Err(MeterError::Incompatible { .. })));
        assert!(metronome.is_playing());
        assert!(metronome.accents().is_accented(1));
    }

    #[test]
    fn subdivision_change_stops_and_resets_accents() {
        let (mut metronome, _) = scheduler();
        metronome.toggle_accent(3);
        metronome.start();

        metronome.set_subdivision(SubdivisionKind::Eighth).unwrap();
        assert!(!metronome.is_playing());
        assert_eq!(metronome.accents(), &AccentSet::downbeat(8));
    }

    #[test]
    fn toggle_accent_bounds() {
        let (mut metronome, _) = scheduler();
        assert!(metronome.toggle_accent(3));
        assert!(!metronome.toggle_accent(4));

        let before = metronome.accents().clone();
        metronome.toggle_accent(1);
        metronome.toggle_accent(1);
        assert_eq!(metronome.accents(), &before);
    }

    #[test]
    fn playback_failure_does_not_stop_the_clock() {
        let (mut metronome, clock) = scheduler();
        metronome.audio_mut().fail = true;
        metronome.start();

        for _ in 0..4 {
            clock.advance(Duration::from_millis(500));
            assert!(metronome.poll());
        }
        assert_eq!(metronome.playback().current_tick, Some(0));
        assert_eq!(metronome.audio().clicks.len(), 5);
    }

    #[test]
    fn with_grid_sets_initial_state() {
        let (metronome, _) = scheduler();
        let grid = BeatGrid::new(TimeSignature::SIX_EIGHT, SubdivisionKind::Sixteenth).unwrap();
        let metronome = metronome.with_grid(grid, Tempo::new(90.0));

        let snapshot = metronome.snapshot();
        assert_eq!(snapshot.grid, grid);
        assert_eq!(snapshot.grid.total_subdivisions(), 12);
        assert_eq!(snapshot.tempo.bpm(), 90.0);
        assert_eq!(snapshot.accents, AccentSet::downbeat(12));
        assert_eq!(snapshot.click_at(0), Some(Click::Accent));
        assert_eq!(snapshot.click_at(1), Some(Click::Regular));
    }
}
