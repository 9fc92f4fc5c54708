//! Encoder micro-benchmark.
//!
//! The interpreter refreshes the active arrays after every block and
//! encodes a state tag for every queued motion, so both sit on the
//! per-line hot path:
//! - G-code array alone
//! - state tag alone
//! - full `ActiveState::update()` with and without a block

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use ngc_common::interp::codes::{G_1, G_92, M_6};
use ngc_common::prelude::*;
use ngc_modal::{ActiveState, encode_active_g_codes, encode_state_tag};

fn reference_settings() -> Settings {
    let mut settings = Settings {
        sequence_number: 1000,
        motion_mode: G_1,
        feed_rate: 1200.0,
        origin_index: 3,
        tool_offset: ToolOffset {
            z: 42.5,
            ..Default::default()
        },
        control_mode: ControlMode::Continuous,
        tolerance: 0.01,
        flood: true,
        g92_offset_applied: true,
        filename: "part.ngc".to_string(),
        ..Default::default()
    };
    settings.spindles[0].direction = SpindleDirection::Clockwise;
    settings.spindles[0].speed = 12000.0;
    let _ = settings.call_stack.push(CallFrame {
        filename: "part.ngc".to_string(),
    });
    settings
}

fn reference_block() -> Block {
    Block::new()
        .with_g(GModalGroup::NonModal, G_92)
        .with_g(GModalGroup::OffsetState, G_92)
        .with_m(MModalGroup::ToolChange, M_6)
}

fn bench_g_codes(c: &mut Criterion) {
    let settings = reference_settings();
    let block = reference_block();

    c.bench_function("encode_active_g_codes", |b| {
        b.iter(|| {
            let g = encode_active_g_codes(
                std::hint::black_box(Some(&block)),
                std::hint::black_box(&settings),
            );
            std::hint::black_box(g.to_array());
        });
    });
}

fn bench_state_tag(c: &mut Criterion) {
    let settings = reference_settings();
    let block = reference_block();

    c.bench_function("encode_state_tag", |b| {
        b.iter(|| {
            let tag = encode_state_tag(
                std::hint::black_box(Some(&block)),
                std::hint::black_box(&settings),
            );
            std::hint::black_box(tag.pack());
        });
    });
}

fn bench_active_state_update(c: &mut Criterion) {
    let settings = reference_settings();
    let block = reference_block();
    let mut group = c.benchmark_group("active_state_update");

    for (label, block) in [("init", None), ("block", Some(&block))] {
        let mut state = ActiveState::default();
        group.bench_with_input(BenchmarkId::from_parameter(label), &block, |b, block| {
            b.iter(|| {
                state.update(std::hint::black_box(*block), std::hint::black_box(&settings));
                std::hint::black_box(&state);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_g_codes,
    bench_state_tag,
    bench_active_state_update
);
criterion_main!(benches);
