//! List Reorder Demo - Scripted Long-Press Drag
//!
//! Drives a drag through a six-item list without any windowing:
//! - Long press on an item to lift it
//! - Drag it down across two neighbours
//! - Release and let the overlay settle
//!
//! Run with `RUST_LOG=trace` to see every exchange and transition, and with
//! `DRAGCELL_PUFFIN=1` to inspect the frames in `puffin_viewer`.

use dragcell::{DragConfig, DragController, PointerEvent, Slot, vec2};
use dragcell_core::{logging, profiling};
use dragcell_test_utils::{GridLayout, HostCall, MockHost};

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    logging::init();
    #[cfg(feature = "profiling")]
    profiling::init_profiling(profiling::ProfilingBackend::from_env());

    let layout = GridLayout::list(vec2(100.0, 40.0), 10.0);
    let mut host = MockHost::flat(
        vec!["inbox", "drafts", "sent", "archive", "spam", "trash"],
        layout,
    );
    let mut drag = DragController::new(DragConfig::default().overlay_scale(1.1));

    let script = [
        PointerEvent::down(vec2(50.0, 120.0)),
        PointerEvent::moved(vec2(52.0, 122.0)),
        PointerEvent::moved(vec2(50.0, 170.0)),
        PointerEvent::moved(vec2(50.0, 220.0)),
        PointerEvent::up(vec2(50.0, 220.0)),
    ];

    for event in script {
        drag.handle_pointer(&mut host, event);
        // Hold each event for half a second of frames.
        for _ in 0..30 {
            profiling::new_frame();
            drag.update(&mut host, FRAME);
        }

        let hidden: Vec<Slot> = host
            .items()
            .slots()
            .filter(|&slot| drag.is_slot_hidden(slot))
            .collect();
        tracing::info!(phase = ?drag.phase(), ?hidden, "after {:?}", event.phase);
    }

    for call in host.calls() {
        if let HostCall::LayoutMove { from, to } = call {
            tracing::info!("layout move {} -> {}", from, to);
        }
    }
    tracing::info!(items = ?host.items(), "final order");
}
