//! metronome - terminal metronome
//!
//! Run with: cargo run -- --bpm 96 --time-signature 7/8 --subdivision eighth

mod app;
mod headless;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::App;
use saavy_metronome::{
    audio::{
        click_queue, AudioOutput, AudioSink, ClickEngine, SampleBank, SampleSink, SilentSink,
        ToneSink,
    },
    engine::{IntervalTimer, MonotonicClock, Scheduler},
    sequencing::{BeatGrid, SubdivisionKind, Tempo, TimeSignature},
    voices::VoiceKind,
};

/// How clicks are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SoundKind {
    /// Synthesized voice, pitched per click
    Tone,
    /// One-shot samples, built-in woodblock unless files are given
    Sample,
}

#[derive(Debug, Parser)]
#[command(name = "metronome", version, about = "Terminal metronome")]
struct Cli {
    /// Tempo in beats per minute (clamped to 20-300)
    #[arg(short, long, default_value_t = Tempo::DEFAULT_BPM)]
    bpm: f64,

    /// Time signature, e.g. 4/4 or 6/8
    #[arg(short, long, default_value_t = TimeSignature::FOUR_FOUR)]
    time_signature: TimeSignature,

    /// Subdivision: whole, half, quarter, eighth, sixteenth,
    /// eighth-sixteenth-sixteenth, sixteenth-sixteenth-eighth
    #[arg(short, long, default_value_t = SubdivisionKind::Quarter)]
    subdivision: SubdivisionKind,

    #[arg(long, value_enum, default_value_t = SoundKind::Tone)]
    sound: SoundKind,

    /// Voice for tone clicks: beep or woodblock
    #[arg(long, default_value_t = VoiceKind::Beep)]
    voice: VoiceKind,

    /// WAV file for accented clicks (sample mode)
    #[arg(long, requires = "regular_sample")]
    accent_sample: Option<PathBuf>,

    /// WAV file for regular clicks (sample mode)
    #[arg(long, requires = "accent_sample")]
    regular_sample: Option<PathBuf>,

    /// Output volume, 0.0-1.0
    #[arg(long, default_value_t = 0.8)]
    volume: f32,

    /// Log file for the TUI (defaults to metronome.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print ticks to stdout instead of running the TUI
    #[arg(long)]
    headless: bool,

    /// Stop after this many measures (headless only)
    #[arg(long, requires = "headless")]
    measures: Option<u64>,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let grid = BeatGrid::new(cli.time_signature, cli.subdivision).wrap_err_with(|| {
        format!(
            "{} does not divide {}",
            cli.subdivision.label(),
            cli.time_signature
        )
    })?;

    // Keep the stream alive for the whole run
    let (sink, _output) = open_audio(&cli)?;
    let timer = IntervalTimer::new(MonotonicClock::new());
    let scheduler = Scheduler::new(sink, timer).with_grid(grid, Tempo::new(cli.bpm));

    if cli.headless {
        return headless::run(scheduler, cli.measures);
    }

    let mut terminal = ratatui::init();
    let result = App::new(scheduler).run(&mut terminal);
    ratatui::restore();
    result
}

fn init_tracing(cli: &Cli) -> EyreResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if cli.headless {
        subscriber.with_writer(std::io::stderr).init();
        return Ok(());
    }

    // The TUI owns the terminal, so logs go to a file
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("metronome.log"));
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    subscriber
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Start the audio stream and build the matching sink.
///
/// A machine without a usable output device still gets a working, silent
/// metronome.
fn open_audio(cli: &Cli) -> EyreResult<(Box<dyn AudioSink>, Option<AudioOutput>)> {
    let loaded = match (&cli.accent_sample, &cli.regular_sample) {
        (Some(accent), Some(regular)) if cli.sound == SoundKind::Sample => Some(
            SampleBank::from_wav_files(accent, regular).wrap_err("failed to load click samples")?,
        ),
        _ => None,
    };

    let (tx, rx) = click_queue();
    let sound = cli.sound;
    let voice = cli.voice;
    let volume = cli.volume;

    let output = AudioOutput::open(move |sample_rate| {
        let engine = ClickEngine::new(sample_rate, voice.build(), rx).with_gain(volume);
        match sound {
            SoundKind::Tone => engine,
            SoundKind::Sample => engine.with_samples(
                loaded.unwrap_or_else(|| SampleBank::woodblock(sample_rate as u32)),
            ),
        }
    });

    match output {
        Ok(output) => {
            let sink: Box<dyn AudioSink> = match sound {
                SoundKind::Tone => Box::new(ToneSink::new(tx)),
                SoundKind::Sample => Box::new(SampleSink::new(tx)),
            };
            Ok((sink, Some(output)))
        }
        Err(err) => {
            tracing::warn!(%err, "audio unavailable, running silent");
            Ok((Box::new(SilentSink::new()), None))
        }
    }
}
