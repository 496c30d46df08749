use crate::{
    animation::{
        descriptor::{
            AnimationDescriptor, PlayMode, Stagger, TimelineDescriptor, TriggerSpec,
        },
        ease::Ease,
        interp::{interpolate, tween_progress},
        track::PropertyTrack,
    },
    engine::{pin::PinState, progress::Scrub, stagger},
    foundation::{
        core::{ScrollRange, Timestamp},
        error::ScrollrigResult,
    },
    host::{ElementId, FrameTick, LayoutQuery, PinHold, PinUpdate, PropertySink, ScrollSample},
    trigger::resolve::resolve_trigger,
};

/// Handle returned by registration, required for cancellation.
///
/// Handles are generation-counted: a handle whose descriptor has been
/// cancelled (or replaced in a reused slot) is silently ignored, so a late
/// `cancel` after teardown is a no-op, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationHandle {
    index: usize,
    generation: u64,
}

/// One progress window within a slot, with its own targets and tracks.
///
/// A plain descriptor is a single segment over `[0, 1]`; a timeline expands
/// to consecutive weight-proportional segments.
struct Segment {
    window: (f64, f64),
    targets: Vec<ElementId>,
    ranks: Vec<usize>,
    max_rank: usize,
    gap: f64,
    tracks: Vec<PropertyTrack>,
    ease: Ease,
}

impl Segment {
    fn new(
        window: (f64, f64),
        targets: Vec<ElementId>,
        tracks: Vec<PropertyTrack>,
        ease: Ease,
        stagger_cfg: Option<Stagger>,
    ) -> Self {
        let (ranks, gap) = match stagger_cfg {
            Some(s) => (stagger::ranks(targets.len(), s.order), s.gap),
            None => (vec![0; targets.len()], 0.0),
        };
        let max_rank = ranks.iter().copied().max().unwrap_or(0);
        Self {
            window,
            targets,
            ranks,
            max_rank,
            gap,
            tracks,
            ease,
        }
    }
}

struct Slot {
    generation: u64,
    trigger: TriggerSpec,
    mode: PlayMode,
    pin: bool,
    segments: Vec<Segment>,
    range: Option<ScrollRange>,
    stale: bool,
    disabled: bool,
    scrub: Scrub,
    tween_armed_at: Option<Timestamp>,
    pin_state: PinState,
}

/// Scroll-linked timeline engine.
///
/// The engine owns the registered descriptors and recomputes them in a
/// single batched pass per display-refresh tick. Raw scroll samples only
/// update a latest-offset snapshot; all layout reads and property writes
/// happen inside [`frame`](Engine::frame), on the one thread driving the
/// loop. Each view constructs its own engine instance; there is no global
/// registry.
#[derive(Default)]
pub struct Engine {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    generation: u64,
    latest_scroll: Option<ScrollSample>,
    last_frame: Option<Timestamp>,
    pending_pin: Vec<(ElementId, PinUpdate)>,
}

impl Engine {
    /// Fresh engine with no registered descriptors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one descriptor. Configuration errors are returned
    /// synchronously; the descriptor produces no writes until the first
    /// `frame` after registration resolves its trigger.
    #[tracing::instrument(skip(self, descriptor))]
    pub fn register_animation(
        &mut self,
        descriptor: AnimationDescriptor,
    ) -> ScrollrigResult<AnimationHandle> {
        descriptor.validate()?;
        let segment = Segment::new(
            (0.0, 1.0),
            descriptor.targets,
            descriptor.tracks,
            descriptor.ease,
            descriptor.stagger,
        );
        Ok(self.insert(descriptor.trigger, descriptor.mode, descriptor.pin, vec![segment]))
    }

    /// Register a timeline of sequential steps sharing one trigger.
    #[tracing::instrument(skip(self, descriptor))]
    pub fn register_timeline(
        &mut self,
        descriptor: TimelineDescriptor,
    ) -> ScrollrigResult<AnimationHandle> {
        descriptor.validate()?;
        let total: f64 = descriptor.steps.iter().map(|s| s.weight).sum();
        let mut segments = Vec::with_capacity(descriptor.steps.len());
        let mut acc = 0.0;
        for step in descriptor.steps {
            let w0 = acc / total;
            acc += step.weight;
            let w1 = acc / total;
            segments.push(Segment::new(
                (w0, w1),
                step.targets,
                step.tracks,
                step.ease,
                step.stagger,
            ));
        }
        Ok(self.insert(descriptor.trigger, descriptor.mode, descriptor.pin, segments))
    }

    /// Cancel a descriptor. Idempotent: stale or already-cancelled handles
    /// are ignored. A held pin is released on the next frame.
    pub fn cancel(&mut self, handle: AnimationHandle) {
        let Some(slot_opt) = self.slots.get_mut(handle.index) else {
            return;
        };
        let Some(slot) = slot_opt else {
            return;
        };
        if slot.generation != handle.generation {
            return;
        }
        if let Some(update) = slot.pin_state.release() {
            self.pending_pin.push((slot.trigger.anchor, update));
        }
        *slot_opt = None;
        self.free.push(handle.index);
    }

    /// Record the latest scroll sample. No recomputation happens here;
    /// scroll events fire far more often than display refresh.
    pub fn push_scroll(&mut self, sample: ScrollSample) {
        self.latest_scroll = Some(sample);
    }

    /// Mark every trigger resolution stale after a layout-affecting event
    /// (resize, reflow, dynamic insertion). Ranges re-resolve on the next
    /// frame.
    pub fn push_resize(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.stale = true;
        }
    }

    /// Number of live (registered, not disabled) descriptors.
    pub fn active_descriptors(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|slot| !slot.disabled)
            .count()
    }

    /// Run one batched recomputation pass and emit property writes.
    ///
    /// Called once per display-refresh tick. Failures are isolated per
    /// descriptor: an unresolvable trigger disables only its own slot and
    /// never interrupts siblings.
    #[tracing::instrument(skip_all, fields(ts = tick.timestamp.0))]
    pub fn frame(
        &mut self,
        tick: FrameTick,
        layout: &dyn LayoutQuery,
        sink: &mut dyn PropertySink,
    ) {
        let dt = self
            .last_frame
            .map(|prev| tick.timestamp.seconds_since(prev))
            .unwrap_or(0.0);
        self.last_frame = Some(tick.timestamp);

        for (element, update) in self.pending_pin.drain(..) {
            sink.pin(element, update);
        }

        let offset = self.latest_scroll.map(|s| s.offset).unwrap_or(0.0);

        for slot_opt in self.slots.iter_mut() {
            let Some(slot) = slot_opt else { continue };
            if slot.disabled {
                continue;
            }

            if slot.range.is_none() || slot.stale {
                slot.range = resolve_trigger(&slot.trigger, layout);
                slot.stale = false;
                if slot.range.is_none() {
                    slot.disabled = true;
                    if let Some(update) = slot.pin_state.release() {
                        sink.pin(slot.trigger.anchor, update);
                    }
                    tracing::warn!(
                        anchor = slot.trigger.anchor.0,
                        "descriptor disabled: unresolvable trigger"
                    );
                    continue;
                }
            }
            let Some(range) = slot.range else { continue };

            let parent = match slot.mode {
                PlayMode::Scrub { smoothing } => {
                    slot.scrub.tick(range.progress(offset), dt, smoothing)
                }
                PlayMode::Tween { duration, repeat } => {
                    if slot.tween_armed_at.is_none() && offset >= range.start {
                        slot.tween_armed_at = Some(tick.timestamp);
                    }
                    match slot.tween_armed_at {
                        None => 0.0,
                        Some(armed) => {
                            tween_progress(tick.timestamp.seconds_since(armed), duration, repeat)
                        }
                    }
                }
            };

            if slot.pin {
                let in_range = range.contains(offset);
                if slot.pin_state.wants_hold(in_range) {
                    let hold = layout.measure(slot.trigger.anchor).map(|rect| PinHold {
                        viewport_y: rect.y0 - offset,
                        reserve_height: rect.height(),
                    });
                    if hold.is_none() {
                        slot.disabled = true;
                        tracing::warn!(
                            anchor = slot.trigger.anchor.0,
                            "descriptor disabled: pin anchor detached"
                        );
                        continue;
                    }
                    if let Some(update) = slot.pin_state.tick(in_range, hold) {
                        sink.pin(slot.trigger.anchor, update);
                    }
                } else if let Some(update) = slot.pin_state.tick(in_range, None) {
                    sink.pin(slot.trigger.anchor, update);
                }
            }

            for segment in &slot.segments {
                let seg_progress = window_progress(parent, segment.window);
                for (i, &target) in segment.targets.iter().enumerate() {
                    let local = stagger::local_progress(
                        seg_progress,
                        segment.ranks[i],
                        segment.max_rank,
                        segment.gap,
                    );
                    let writes = interpolate(&segment.tracks, segment.ease, local);
                    sink.write(target, &writes);
                }
            }
        }
    }

    fn insert(
        &mut self,
        trigger: TriggerSpec,
        mode: PlayMode,
        pin: bool,
        segments: Vec<Segment>,
    ) -> AnimationHandle {
        self.generation += 1;
        let slot = Slot {
            generation: self.generation,
            trigger,
            mode,
            pin,
            segments,
            range: None,
            stale: false,
            disabled: false,
            scrub: Scrub::new(),
            tween_armed_at: None,
            pin_state: PinState::new(),
        };
        let index = match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(slot);
                i
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };
        AnimationHandle {
            index,
            generation: self.generation,
        }
    }
}

/// Remap parent progress into a segment's local window, clamped to `[0, 1]`
/// with the degenerate zero-length guard.
fn window_progress(parent: f64, window: (f64, f64)) -> f64 {
    let (w0, w1) = window;
    if w1 <= w0 {
        return if parent >= w1 { 1.0 } else { 0.0 };
    }
    ((parent - w0) / (w1 - w0)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
