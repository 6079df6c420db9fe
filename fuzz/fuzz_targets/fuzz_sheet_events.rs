#![no_main]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slideup_core::event::{Event, HitRegion, PointerEvent};
use slideup_widgets::{BottomSheet, SheetConfig, SheetHandle, SheetState};

#[derive(Debug, Arbitrary)]
struct Input {
    height: u16,
    min_closing_height: u16,
    duration_ms: u16,
    close_on_drag_down: bool,
    drag_from_top_only: bool,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Open,
    Close,
    Down { y: i16, on_handle: bool },
    Move { y: i16 },
    Up { y: i16 },
    Cancel { y: i16 },
    MaskPress,
    BackRequest,
    Focus(bool),
    SetDrag(bool),
    SetMask(bool),
    SetBack(bool),
    Tick { ms: u8 },
}

fuzz_target!(|input: Input| {
    let height = f64::from(input.height);
    // Keep min strictly below height so the config always validates.
    let min = if input.height == 0 {
        0.0
    } else {
        f64::from(input.min_closing_height % input.height)
    };
    let config = SheetConfig::new()
        .height(height)
        .min_closing_height(min)
        .duration(Duration::from_millis(u64::from(input.duration_ms % 2_000)))
        .close_on_drag_down(input.close_on_drag_down)
        .drag_from_top_only(input.drag_from_top_only);

    let closes = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&closes);
    let mut sheet = BottomSheet::new(config)
        .expect("generated config must validate")
        .on_close(move || counter.set(counter.get() + 1));
    let store = sheet.frame_store();
    let mut unmounts = 0u32;

    for op in input.ops.iter().take(512) {
        let was_visible = sheet.is_visible();
        match *op {
            Op::Open => sheet.open(),
            Op::Close => sheet.close(),
            Op::Down { y, on_handle } => {
                let region = if on_handle {
                    HitRegion::Handle
                } else {
                    HitRegion::Content
                };
                let event = PointerEvent::down(0.0, f64::from(y)).with_region(region);
                sheet.handle_event(&Event::Pointer(event));
            }
            Op::Move { y } => {
                sheet.handle_event(&Event::Pointer(PointerEvent::moved(0.0, f64::from(y))));
            }
            Op::Up { y } => {
                sheet.handle_event(&Event::Pointer(PointerEvent::up(0.0, f64::from(y))));
            }
            Op::Cancel { y } => {
                sheet.handle_event(&Event::Pointer(PointerEvent::cancel(0.0, f64::from(y))));
            }
            Op::MaskPress => {
                sheet.handle_event(&Event::MaskPress);
            }
            Op::BackRequest => {
                sheet.handle_event(&Event::BackRequest);
            }
            Op::Focus(gained) => {
                sheet.handle_event(&Event::Focus(gained));
            }
            Op::SetDrag(on) => sheet.set_close_on_drag_down(on),
            Op::SetMask(on) => sheet.set_close_on_press_mask(on),
            Op::SetBack(on) => sheet.set_close_on_press_back(on),
            Op::Tick { ms } => {
                sheet.tick(Duration::from_millis(u64::from(ms)));
            }
        }

        let frame = sheet.frame();
        if was_visible && !frame.visible {
            unmounts += 1;
        }
        assert_eq!(closes.get(), unmounts, "close callback count drifted");
        assert!(frame.height.is_finite());
        assert!(frame.height >= 0.0 && frame.height <= height, "height out of range");
        assert!(frame.pan.y.is_finite());
        assert_eq!(frame.pan.x, 0.0);
        if !frame.visible {
            assert_eq!(frame.state, SheetState::Closed);
            assert!(frame.pan.is_zero());
        }
        assert_eq!(store.load(), frame);
    }
});
