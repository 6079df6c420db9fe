//! Benchmark: bottom sheet tick, drag routing and frame reads.
//!
//! Run with: `cargo bench -p slideup-widgets --bench sheet_bench`
//!
//! Measures the per-frame cost a host pays: one `tick` while a run is in
//! flight, one pointer move during a drag, and one frame read from the
//! shared store.

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use slideup_core::event::{Event, PointerEvent};
use slideup_widgets::{BottomSheet, SheetConfig, SheetHandle};

const FRAME: Duration = Duration::from_millis(16);

fn opened_sheet() -> BottomSheet {
    let mut sheet = BottomSheet::new(SheetConfig::new().close_on_drag_down(true))
        .unwrap_or_else(|err| panic!("bench config rejected: {err}"));
    sheet.open();
    sheet.tick(Duration::from_secs(1));
    sheet
}

// ===========================================================================
// Tick
// ===========================================================================

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("idle", |b| {
        let mut sheet = opened_sheet();
        b.iter(|| black_box(sheet.tick(black_box(FRAME))));
    });

    group.bench_function("open_cycle", |b| {
        b.iter_batched(
            || {
                let mut sheet = BottomSheet::new(SheetConfig::new())
                    .unwrap_or_else(|err| panic!("bench config rejected: {err}"));
                sheet.open();
                sheet
            },
            |mut sheet| {
                for _ in 0..20 {
                    sheet.tick(FRAME);
                }
                black_box(sheet)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("snap_back_cycle", |b| {
        b.iter_batched(
            || {
                let mut sheet = opened_sheet();
                sheet.handle_event(&Event::Pointer(PointerEvent::down(0.0, 300.0)));
                sheet.handle_event(&Event::Pointer(PointerEvent::moved(0.0, 340.0)));
                sheet.handle_event(&Event::Pointer(PointerEvent::up(0.0, 340.0)));
                sheet
            },
            |mut sheet| {
                while sheet.is_animating() {
                    sheet.tick(FRAME);
                }
                black_box(sheet)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ===========================================================================
// Drag routing
// ===========================================================================

fn bench_drag_move(c: &mut Criterion) {
    let mut sheet = opened_sheet();
    sheet.handle_event(&Event::Pointer(PointerEvent::down(0.0, 300.0)));
    let mut y = 300.0;
    c.bench_function("drag/move", |b| {
        b.iter(|| {
            y = if y > 360.0 { 301.0 } else { y + 1.0 };
            black_box(sheet.handle_event(&Event::Pointer(PointerEvent::moved(0.0, y))))
        });
    });
}

// ===========================================================================
// Frame reads
// ===========================================================================

fn bench_frame_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_read");
    let sheet = opened_sheet();
    let store = sheet.frame_store();

    group.bench_function("store/load", |b| {
        b.iter(|| black_box(store.load()));
    });
    group.bench_function("store/load_ref", |b| {
        b.iter(|| black_box(store.load_ref().height));
    });
    group.bench_function("sheet/frame", |b| {
        b.iter(|| black_box(sheet.frame()));
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_drag_move, bench_frame_read);
criterion_main!(benches);
