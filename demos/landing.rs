use std::collections::BTreeMap;

use scrollrig::{
    AnchorSpec, AnimationDescriptor, ElementId, Engine, FrameTick, LayoutQuery, PinUpdate,
    PlayMode, PropertyId, PropertySink, PropertyTrack, PropertyWrite, Rect, ScrollSample, Stagger,
    StaggerOrder, Timestamp, TriggerSpec, Value, Viewport,
};

const HERO_SECTION: ElementId = ElementId(1);
const HERO_SPHERE: ElementId = ElementId(2);
const CARDS_SECTION: ElementId = ElementId(3);
const CARD_A: ElementId = ElementId(4);
const CARD_B: ElementId = ElementId(5);
const CARD_C: ElementId = ElementId(6);
const TITLE: ElementId = ElementId(7);

/// Static page layout: document-space bounds per element.
struct PageLayout {
    rects: BTreeMap<ElementId, Rect>,
}

impl PageLayout {
    fn new() -> Self {
        let mut rects = BTreeMap::new();
        rects.insert(HERO_SECTION, Rect::new(0.0, 0.0, 1280.0, 900.0));
        rects.insert(HERO_SPHERE, Rect::new(440.0, 300.0, 840.0, 700.0));
        rects.insert(TITLE, Rect::new(100.0, 1100.0, 1180.0, 1200.0));
        rects.insert(CARDS_SECTION, Rect::new(0.0, 1800.0, 1280.0, 2700.0));
        rects.insert(CARD_A, Rect::new(100.0, 1900.0, 460.0, 2300.0));
        rects.insert(CARD_B, Rect::new(460.0, 1900.0, 820.0, 2300.0));
        rects.insert(CARD_C, Rect::new(820.0, 1900.0, 1180.0, 2300.0));
        Self { rects }
    }
}

impl LayoutQuery for PageLayout {
    fn viewport(&self) -> Viewport {
        Viewport {
            height: 900.0,
            scroll_height: 3600.0,
        }
    }

    fn measure(&self, element: ElementId) -> Option<Rect> {
        self.rects.get(&element).copied()
    }
}

/// Sink that remembers the latest value per element/property and logs pins.
#[derive(Default)]
struct PageSink {
    state: BTreeMap<(ElementId, &'static str), f64>,
}

impl PropertySink for PageSink {
    fn write(&mut self, element: ElementId, values: &[PropertyWrite]) {
        for write in values {
            let name = match write.property {
                PropertyId::Rotate => "rotate",
                PropertyId::RotateY => "rotateY",
                PropertyId::Opacity => "opacity",
                PropertyId::TranslateY => "translateY",
                PropertyId::Scale => "scale",
                _ => "other",
            };
            if let Value::Scalar(v) = write.value {
                self.state.insert((element, name), v);
            }
        }
    }

    fn pin(&mut self, element: ElementId, update: PinUpdate) {
        match update {
            PinUpdate::Hold(hold) => {
                eprintln!(
                    "pin {:?} at viewport y {:.0} (reserving {:.0}px)",
                    element, hold.viewport_y, hold.reserve_height
                );
            }
            PinUpdate::Release => eprintln!("release {element:?}"),
        }
    }
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let layout = PageLayout::new();
    let mut sink = PageSink::default();
    let mut engine = Engine::new();

    // Hero sphere spins and grows while the hero section scrolls out,
    // loosely scrubbed so fast scrolling stays smooth.
    let mut hero = AnimationDescriptor::scrub(
        vec![HERO_SPHERE],
        TriggerSpec {
            anchor: HERO_SECTION,
            start: AnchorSpec::parse("top top")?,
            end: AnchorSpec::parse("bottom top")?,
        },
        vec![
            PropertyTrack::scalar(PropertyId::RotateY, 0.0, 360.0),
            PropertyTrack::scalar(PropertyId::Scale, 1.0, 1.5),
        ],
    );
    hero.mode = PlayMode::Scrub { smoothing: 1.0 };
    let _hero = engine.register_animation(hero)?;

    // Section title rises in as it crosses the lower viewport.
    let title = AnimationDescriptor::scrub(
        vec![TITLE],
        TriggerSpec {
            anchor: TITLE,
            start: AnchorSpec::parse("top 80%")?,
            end: AnchorSpec::parse("top 50%")?,
        },
        vec![
            PropertyTrack::from_scalar(PropertyId::TranslateY, 100.0)?,
            PropertyTrack::from_scalar(PropertyId::Opacity, 0.0)?,
        ],
    );
    let _title = engine.register_animation(title)?;

    // Cards converge while their section is pinned, staggered from the
    // edges inward.
    let mut cards = AnimationDescriptor::scrub(
        vec![CARD_A, CARD_B, CARD_C],
        TriggerSpec {
            anchor: CARDS_SECTION,
            start: AnchorSpec::parse("top top")?,
            end: AnchorSpec::parse("bottom center")?,
        },
        vec![
            PropertyTrack::from_scalar(PropertyId::TranslateY, 200.0)?,
            PropertyTrack::from_scalar(PropertyId::Opacity, 0.0)?,
        ],
    );
    cards.pin = true;
    cards.stagger = Some(Stagger {
        gap: 0.2,
        order: StaggerOrder::FromEdges,
    });
    let _cards = engine.register_animation(cards)?;

    // Sweep the page top to bottom at 60fps, sampling state on the way.
    let mut now = 0.0;
    for step in 0..=180 {
        let offset = f64::from(step) * 15.0;
        engine.push_scroll(ScrollSample {
            offset,
            timestamp: Timestamp(now),
        });
        engine.frame(
            FrameTick {
                timestamp: Timestamp(now),
            },
            &layout,
            &mut sink,
        );
        now += 1.0 / 60.0;

        if step % 30 == 0 {
            let sphere = sink
                .state
                .get(&(HERO_SPHERE, "rotateY"))
                .copied()
                .unwrap_or(0.0);
            let card_b = sink
                .state
                .get(&(CARD_B, "opacity"))
                .copied()
                .unwrap_or(0.0);
            eprintln!("offset {offset:>6.0}px  sphere {sphere:>5.1}deg  card B opacity {card_b:.2}");
        }
    }

    Ok(())
}
