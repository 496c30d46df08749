use super::*;
use crate::{
    animation::{
        descriptor::{Repeat, Stagger, StaggerOrder, TimelineStep},
        interp::PropertyWrite,
        track::{PropertyId, Value},
    },
    foundation::core::{Rect, Viewport},
    host::PinHold,
    trigger::anchor::AnchorSpec,
};
use std::collections::BTreeMap;

struct FakeLayout {
    viewport: Viewport,
    rects: BTreeMap<ElementId, Rect>,
}

impl FakeLayout {
    fn new() -> Self {
        Self {
            viewport: Viewport {
                height: 1000.0,
                scroll_height: 20_000.0,
            },
            rects: BTreeMap::new(),
        }
    }

    fn with(mut self, element: ElementId, top: f64, bottom: f64) -> Self {
        self.rects.insert(element, Rect::new(0.0, top, 800.0, bottom));
        self
    }
}

impl LayoutQuery for FakeLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn measure(&self, element: ElementId) -> Option<Rect> {
        self.rects.get(&element).copied()
    }
}

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(ElementId, Vec<PropertyWrite>)>,
    pins: Vec<(ElementId, PinUpdate)>,
}

impl RecordingSink {
    fn last_scalar(&self, element: ElementId) -> Option<f64> {
        self.writes
            .iter()
            .rev()
            .find(|(el, _)| *el == element)
            .and_then(|(_, values)| match values.first()?.value {
                Value::Scalar(v) => Some(v),
                Value::Color(_) => None,
            })
    }
}

impl PropertySink for RecordingSink {
    fn write(&mut self, element: ElementId, values: &[PropertyWrite]) {
        self.writes.push((element, values.to_vec()));
    }

    fn pin(&mut self, element: ElementId, update: PinUpdate) {
        self.pins.push((element, update));
    }
}

const ANCHOR: ElementId = ElementId(1);
const TARGET: ElementId = ElementId(2);

fn absolute_trigger(start: f64, end: f64) -> TriggerSpec {
    TriggerSpec {
        anchor: ANCHOR,
        start: AnchorSpec::Absolute(start),
        end: AnchorSpec::Absolute(end),
    }
}

fn rotation_descriptor() -> AnimationDescriptor {
    AnimationDescriptor::scrub(
        vec![TARGET],
        absolute_trigger(1000.0, 2000.0),
        vec![PropertyTrack::scalar(PropertyId::Rotate, 0.0, 360.0)],
    )
}

fn scroll(engine: &mut Engine, offset: f64, at: f64) {
    engine.push_scroll(ScrollSample {
        offset,
        timestamp: Timestamp(at),
    });
}

fn tick(engine: &mut Engine, at: f64, layout: &FakeLayout, sink: &mut RecordingSink) {
    engine.frame(
        FrameTick {
            timestamp: Timestamp(at),
        },
        layout,
        sink,
    );
}

#[test]
fn midrange_offset_yields_midrange_rotation() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    engine.register_animation(rotation_descriptor()).unwrap();

    scroll(&mut engine, 1500.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);

    assert_eq!(sink.last_scalar(TARGET), Some(180.0));
}

#[test]
fn offsets_outside_the_range_clamp_to_the_endpoints() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    engine.register_animation(rotation_descriptor()).unwrap();

    scroll(&mut engine, 100.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(0.0));

    scroll(&mut engine, 9000.0, 0.03);
    tick(&mut engine, 0.032, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(360.0));
}

#[test]
fn degenerate_range_snaps_to_the_end_state() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    let mut descriptor = rotation_descriptor();
    descriptor.trigger = absolute_trigger(500.0, 500.0);
    engine.register_animation(descriptor).unwrap();

    scroll(&mut engine, 499.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(0.0));

    scroll(&mut engine, 500.0, 0.03);
    tick(&mut engine, 0.032, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(360.0));
}

#[test]
fn cancel_is_idempotent_and_stops_writes() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    let handle = engine.register_animation(rotation_descriptor()).unwrap();

    scroll(&mut engine, 1500.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert!(!sink.writes.is_empty());

    engine.cancel(handle);
    engine.cancel(handle);
    assert_eq!(engine.active_descriptors(), 0);

    sink.writes.clear();
    tick(&mut engine, 0.032, &layout, &mut sink);
    tick(&mut engine, 0.048, &layout, &mut sink);
    assert!(sink.writes.is_empty());
}

#[test]
fn stale_handles_never_touch_reused_slots() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();

    let old = engine.register_animation(rotation_descriptor()).unwrap();
    engine.cancel(old);
    // The replacement reuses the freed slot.
    let _new = engine.register_animation(rotation_descriptor()).unwrap();
    engine.cancel(old);
    assert_eq!(engine.active_descriptors(), 1);

    scroll(&mut engine, 1500.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(180.0));
}

#[test]
fn unresolvable_trigger_disables_only_its_own_descriptor() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();

    let mut broken = rotation_descriptor();
    broken.trigger.anchor = ElementId(99);
    engine.register_animation(broken).unwrap();
    engine.register_animation(rotation_descriptor()).unwrap();

    scroll(&mut engine, 1500.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);

    assert_eq!(engine.active_descriptors(), 1);
    assert_eq!(sink.last_scalar(TARGET), Some(180.0));

    // The disabled descriptor stays inert on later frames.
    sink.writes.clear();
    tick(&mut engine, 0.032, &layout, &mut sink);
    assert_eq!(sink.writes.len(), 1);
}

#[test]
fn resize_re_resolves_relative_triggers() {
    let before = FakeLayout::new().with(ANCHOR, 1000.0, 2000.0);
    let after = FakeLayout::new().with(ANCHOR, 3000.0, 4000.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();

    let descriptor = AnimationDescriptor::scrub(
        vec![TARGET],
        TriggerSpec {
            anchor: ANCHOR,
            start: AnchorSpec::parse("top top").unwrap(),
            end: AnchorSpec::parse("bottom top").unwrap(),
        },
        vec![PropertyTrack::scalar(PropertyId::Rotate, 0.0, 360.0)],
    );
    engine.register_animation(descriptor).unwrap();

    scroll(&mut engine, 1500.0, 0.0);
    tick(&mut engine, 0.016, &before, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(180.0));

    // Element moved but no layout event arrived: the stale resolution is
    // still in effect.
    tick(&mut engine, 0.032, &after, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(180.0));

    // The resize event corrects it.
    engine.push_resize();
    tick(&mut engine, 0.048, &after, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(0.0));
}

#[test]
fn scrubbed_progress_lags_and_settles() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    let mut descriptor = rotation_descriptor();
    descriptor.mode = PlayMode::Scrub { smoothing: 0.5 };
    engine.register_animation(descriptor).unwrap();

    // Settle at 0 first, then jump the scroll to the end of the range.
    scroll(&mut engine, 0.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    scroll(&mut engine, 2000.0, 0.02);
    tick(&mut engine, 0.032, &layout, &mut sink);

    let first = sink.last_scalar(TARGET).unwrap();
    assert!(first > 0.0 && first < 360.0, "expected lag, got {first}");

    let mut now = 0.032;
    let mut prev = first;
    for _ in 0..800 {
        now += 0.016;
        tick(&mut engine, now, &layout, &mut sink);
        let v = sink.last_scalar(TARGET).unwrap();
        assert!(v >= prev && v <= 360.0);
        prev = v;
    }
    assert_eq!(prev, 360.0);
}

#[test]
fn staggered_targets_fan_out_in_rank_order() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();

    let cards = vec![ElementId(10), ElementId(11), ElementId(12)];
    let mut descriptor = AnimationDescriptor::scrub(
        cards.clone(),
        absolute_trigger(1000.0, 2000.0),
        vec![PropertyTrack::scalar(PropertyId::Opacity, 0.0, 1.0)],
    );
    descriptor.stagger = Some(Stagger {
        gap: 0.25,
        order: StaggerOrder::Forward,
    });
    engine.register_animation(descriptor).unwrap();

    scroll(&mut engine, 1500.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);

    assert_eq!(sink.last_scalar(ElementId(10)), Some(1.0));
    assert_eq!(sink.last_scalar(ElementId(11)), Some(0.5));
    assert_eq!(sink.last_scalar(ElementId(12)), Some(0.0));
}

#[test]
fn timeline_steps_run_sequentially() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();

    let step = |target: ElementId| TimelineStep {
        targets: vec![target],
        tracks: vec![PropertyTrack::scalar(PropertyId::Opacity, 0.0, 1.0)],
        ease: Ease::Linear,
        weight: 1.0,
        stagger: None,
    };
    let timeline = TimelineDescriptor {
        trigger: absolute_trigger(1000.0, 2000.0),
        steps: vec![step(ElementId(20)), step(ElementId(21))],
        mode: PlayMode::Scrub { smoothing: 0.0 },
        pin: false,
    };
    engine.register_timeline(timeline).unwrap();

    // Parent progress 0.25: first step halfway, second untouched.
    scroll(&mut engine, 1250.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert_eq!(sink.last_scalar(ElementId(20)), Some(0.5));
    assert_eq!(sink.last_scalar(ElementId(21)), Some(0.0));

    // Parent progress 0.75: first step done, second halfway.
    scroll(&mut engine, 1750.0, 0.03);
    tick(&mut engine, 0.032, &layout, &mut sink);
    assert_eq!(sink.last_scalar(ElementId(20)), Some(1.0));
    assert_eq!(sink.last_scalar(ElementId(21)), Some(0.5));
}

#[test]
fn tween_runs_on_the_wall_clock_once_armed() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    let mut descriptor = rotation_descriptor();
    descriptor.mode = PlayMode::Tween {
        duration: 2.0,
        repeat: Repeat::None,
    };
    engine.register_animation(descriptor).unwrap();

    // Not armed before the trigger offset.
    scroll(&mut engine, 0.0, 0.0);
    tick(&mut engine, 0.0, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(0.0));

    // Arms on entry; progress then follows elapsed time, not scroll.
    scroll(&mut engine, 1200.0, 1.0);
    tick(&mut engine, 1.0, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(0.0));

    tick(&mut engine, 2.0, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(180.0));

    // Scrolling back out does not rewind a running tween.
    scroll(&mut engine, 0.0, 2.5);
    tick(&mut engine, 3.0, &layout, &mut sink);
    assert_eq!(sink.last_scalar(TARGET), Some(360.0));
}

#[test]
fn pinned_element_holds_position_while_progress_advances() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    let mut descriptor = rotation_descriptor();
    descriptor.pin = true;
    engine.register_animation(descriptor).unwrap();

    // Enter the trigger range: the anchor pins at its current viewport
    // position with its space reserved.
    scroll(&mut engine, 1000.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert_eq!(
        sink.pins,
        vec![(
            ANCHOR,
            PinUpdate::Hold(PinHold {
                viewport_y: 0.0,
                reserve_height: 600.0,
            })
        )]
    );
    let p0 = sink.last_scalar(TARGET).unwrap();

    // Another 100px of scroll: progress moves, no further pin updates.
    scroll(&mut engine, 1100.0, 0.03);
    tick(&mut engine, 0.032, &layout, &mut sink);
    assert_eq!(sink.pins.len(), 1);
    let p1 = sink.last_scalar(TARGET).unwrap();
    assert!(p1 > p0);

    // Leaving the range releases.
    scroll(&mut engine, 2500.0, 0.05);
    tick(&mut engine, 0.048, &layout, &mut sink);
    assert_eq!(sink.pins.len(), 2);
    assert_eq!(sink.pins[1], (ANCHOR, PinUpdate::Release));
}

#[test]
fn cancelling_a_pinned_descriptor_releases_on_the_next_frame() {
    let layout = FakeLayout::new().with(ANCHOR, 1000.0, 1600.0);
    let mut engine = Engine::new();
    let mut sink = RecordingSink::default();
    let mut descriptor = rotation_descriptor();
    descriptor.pin = true;
    let handle = engine.register_animation(descriptor).unwrap();

    scroll(&mut engine, 1200.0, 0.0);
    tick(&mut engine, 0.016, &layout, &mut sink);
    assert!(matches!(sink.pins[0].1, PinUpdate::Hold(_)));

    engine.cancel(handle);
    tick(&mut engine, 0.032, &layout, &mut sink);
    assert_eq!(sink.pins.len(), 2);
    assert_eq!(sink.pins[1], (ANCHOR, PinUpdate::Release));

    // Cancelling again queues nothing further.
    engine.cancel(handle);
    tick(&mut engine, 0.048, &layout, &mut sink);
    assert_eq!(sink.pins.len(), 2);
}

#[test]
fn registration_rejects_malformed_descriptors_synchronously() {
    let mut engine = Engine::new();

    let mut bad = rotation_descriptor();
    bad.tracks = vec![PropertyTrack {
        property: PropertyId::Rotate,
        from: Value::Scalar(0.0),
        to: Value::Color(crate::foundation::core::Rgba8::transparent()),
    }];
    assert!(engine.register_animation(bad).is_err());

    let mut empty = rotation_descriptor();
    empty.targets = vec![];
    assert!(engine.register_animation(empty).is_err());

    assert_eq!(engine.active_descriptors(), 0);
}
