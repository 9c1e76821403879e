use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use farm_quest::core::{World, WorldObject};
use farm_quest::term::{
    encode_diff_into, encode_full_into, FarmView, ScreenBuffer, StyleRegistry,
};
use farm_quest::types::{Direction, GameAction, Tone};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn busy_world() -> World {
    let mut world = World::new(1);
    world.place_object((62, 7), WorldObject::Tree { health: 66 });
    world.place_object((50, 11), WorldObject::FarmPlot);
    world.apply(GameAction::SelectTool(farm_quest::types::Tool::Hoe));
    world.set_status("A long message that keeps the status line busy", Tone::Info, 1000);
    world
}

#[test]
fn draw_and_encode_are_allocation_free_after_warmup() {
    let view = FarmView::new();
    let styles = StyleRegistry::new(true);
    let world = busy_world();
    let mut fb = ScreenBuffer::default();
    let mut out = Vec::new();

    // Warm-up grows the output buffer to its working size.
    view.render_into(&world, &mut fb);
    encode_full_into(&fb, &styles, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            view.render_into(&world, &mut fb);
            out.clear();
            encode_full_into(&fb, &styles, &mut out).unwrap();
        }
    });

    assert!(allocs == 0, "allocations: {allocs}");
}

#[test]
fn diff_encoding_and_idle_ticks_are_allocation_free() {
    let view = FarmView::new();
    let styles = StyleRegistry::new(true);
    let mut world = busy_world();
    let mut prev = ScreenBuffer::default();
    let mut next = ScreenBuffer::default();
    let mut out = Vec::with_capacity(256 * 1024);

    view.render_into(&world, &mut prev);
    world.apply(GameAction::Move(Direction::Left));

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            world.tick_frame();
            view.render_into(&world, &mut next);
            out.clear();
            encode_diff_into(&prev, &next, &styles, &mut out).unwrap();
            prev.clone_from(&next);
        }
    });

    assert!(allocs == 0, "allocations: {allocs}");
}
