//! Headless mode - one line per tick on stdout

use std::io::{self, Write};

use color_eyre::eyre::Result as EyreResult;

use saavy_metronome::{
    audio::AudioSink,
    engine::{Scheduler, Timer},
    sequencing::Click,
};

/// Run for `measures` measures, or until interrupted when `None`.
pub fn run<A: AudioSink, T: Timer>(
    mut scheduler: Scheduler<A, T>,
    measures: Option<u64>,
) -> EyreResult<()> {
    let limit = tick_limit(measures, scheduler.grid().total_subdivisions());
    if limit == Some(0) {
        return Ok(());
    }

    let mut out = io::stdout().lock();
    scheduler.start();
    write_tick(&mut out, &scheduler)?;
    let mut ticks = 1u64;

    while limit.is_none_or(|limit| ticks < limit) {
        if let Some(wait) = scheduler.time_until_tick() {
            std::thread::sleep(wait);
        }
        if scheduler.poll() {
            write_tick(&mut out, &scheduler)?;
            ticks += 1;
        }
    }

    scheduler.stop();
    Ok(())
}

/// Ticks to play for `measures` measures, `None` for no limit.
fn tick_limit(measures: Option<u64>, ticks_per_measure: usize) -> Option<u64> {
    measures.map(|m| m.saturating_mul(ticks_per_measure as u64))
}

fn write_tick<A: AudioSink, T: Timer>(
    out: &mut impl Write,
    scheduler: &Scheduler<A, T>,
) -> io::Result<()> {
    let snapshot = scheduler.snapshot();
    let Some(tick) = snapshot.playback.current_tick else {
        return Ok(());
    };

    let sound = match snapshot.click_at(tick) {
        Some(Click::Accent) => "ACCENT",
        Some(Click::Regular) => "click",
        None => "-",
    };
    writeln!(
        out,
        "bar {:>3}  tick {:>2}/{}  {:<6}  {}",
        snapshot.measures_elapsed + 1,
        tick + 1,
        snapshot.grid.total_subdivisions(),
        sound,
        snapshot.tempo
    )?;
    out.flush()
}
