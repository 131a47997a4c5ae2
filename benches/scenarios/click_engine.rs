//! Benchmarks for full audio-callback blocks of the click engine.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_metronome::{
    audio::{click_queue, AudioSink, ClickEngine, SampleBank, SampleSink, ToneSink},
    voices::VoiceKind,
};
use strum::IntoEnumIterator;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_click_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/click_engine");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // A click every block is far denser than any real tempo
        for voice in VoiceKind::iter() {
            let (tx, rx) = click_queue();
            let mut sink = ToneSink::new(tx);
            let mut engine = ClickEngine::new(SAMPLE_RATE, voice.build(), rx);
            group.bench_with_input(
                BenchmarkId::new(format!("tone_{voice}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        let _ = sink.play_click(true);
                        engine.render_block(black_box(&mut buffer));
                    })
                },
            );
        }

        let (tx, rx) = click_queue();
        let mut sink = SampleSink::new(tx);
        let mut engine = ClickEngine::new(SAMPLE_RATE, VoiceKind::Beep.build(), rx)
            .with_samples(SampleBank::woodblock(SAMPLE_RATE as u32));
        group.bench_with_input(BenchmarkId::new("sample", size), &size, |b, _| {
            b.iter(|| {
                let _ = sink.play_click(false);
                engine.render_block(black_box(&mut buffer));
            })
        });

        // Between clicks
        let (_tx, rx) = click_queue();
        let mut engine = ClickEngine::new(SAMPLE_RATE, VoiceKind::Beep.build(), rx);
        group.bench_with_input(BenchmarkId::new("silent", size), &size, |b, _| {
            b.iter(|| engine.render_block(black_box(&mut buffer)))
        });
    }

    group.finish();
}
