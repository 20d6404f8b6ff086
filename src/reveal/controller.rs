//! Scroll-triggered reveal bookkeeping.
//!
//! The controller never touches the DOM. It records which elements have
//! been seen, when, and answers "what does element X look like at time t"
//! so the stage can paint it. Time is passed in by the caller in
//! milliseconds on a single monotonic clock (`performance.now()` in the
//! browser).

use std::collections::HashMap;
use std::fmt;

/// Key the stage uses to address a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Displacement in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: Offset, t: f64) -> Offset {
        Offset {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// What starts the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    /// First time the element intersects the viewport.
    #[default]
    InView,
    /// As soon as the element is registered.
    Mount,
}

/// Visual parameters of one reveal. Reveals always fire once: after the
/// first trigger, later visibility changes are ignored. Opacities outside
/// [0, 1] are clamped wherever a frame is produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub initial_offset: Offset,
    pub opacity_initial: f64,
    pub opacity_final: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: RevealTrigger,
}

impl RevealConfig {
    /// Fade in from `distance` px below the resting position.
    pub const fn fade_up(distance: f64, duration_ms: u32) -> Self {
        Self {
            initial_offset: Offset::new(0.0, distance),
            opacity_initial: 0.0,
            opacity_final: 1.0,
            duration_ms,
            delay_ms: 0,
            trigger: RevealTrigger::InView,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay of `index * step_ms`, for rows of cards that cascade in.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.with_delay(index.saturating_mul(step_ms))
    }

    pub const fn on_mount(mut self) -> Self {
        self.trigger = RevealTrigger::Mount;
        self
    }

    /// Same end state, reached instantly on trigger.
    pub const fn flattened(mut self) -> Self {
        self.delay_ms = 0;
        self.duration_ms = 0;
        self
    }

    pub fn initial_frame(&self) -> RevealFrame {
        RevealFrame {
            offset: self.initial_offset,
            opacity: clamp_unit(self.opacity_initial),
        }
    }

    pub fn final_frame(&self) -> RevealFrame {
        RevealFrame {
            offset: Offset::ZERO,
            opacity: clamp_unit(self.opacity_final),
        }
    }

    /// Milliseconds from trigger until the element is at rest.
    pub fn total_ms(&self) -> f64 {
        f64::from(self.delay_ms) + f64::from(self.duration_ms)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Cubic ease-out: fast start, gentle landing. Maps [0, 1] onto [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Style values the rendering layer applies to an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub offset: Offset,
    pub opacity: f64,
}

impl RevealFrame {
    pub fn transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.offset.x, self.offset.y)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    /// Inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform(), self.opacity_css())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealableElement {
    config: RevealConfig,
    triggered_at: Option<f64>,
}

impl RevealableElement {
    fn new(config: RevealConfig) -> Self {
        Self {
            config,
            triggered_at: None,
        }
    }

    pub fn triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn triggered_at(&self) -> Option<f64> {
        self.triggered_at
    }

    pub fn frame_at(&self, now_ms: f64) -> RevealFrame {
        let Some(triggered_at) = self.triggered_at else {
            return self.config.initial_frame();
        };

        let start = triggered_at + f64::from(self.config.delay_ms);
        if now_ms < start {
            return self.config.initial_frame();
        }

        let duration = f64::from(self.config.duration_ms);
        if duration <= 0.0 || now_ms >= start + duration {
            return self.config.final_frame();
        }

        let eased = ease_out_cubic((now_ms - start) / duration);
        let from = self.config.initial_frame();
        let to = self.config.final_frame();
        RevealFrame {
            offset: from.offset.lerp(to.offset, eased),
            opacity: from.opacity + (to.opacity - from.opacity) * eased,
        }
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        match self.triggered_at {
            Some(at) => now_ms >= at + self.config.total_ms(),
            None => false,
        }
    }
}

/// Returned by [`ViewportRevealController::register`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealHandle {
    id: ElementId,
    triggered: bool,
}

impl RevealHandle {
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// True when registration itself started the reveal (mount trigger).
    pub fn triggered(&self) -> bool {
        self.triggered
    }
}

#[derive(Debug, Default)]
pub struct ViewportRevealController {
    elements: HashMap<ElementId, RevealableElement>,
}

impl ViewportRevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id`. An existing record under the same id is
    /// replaced by a fresh, untriggered one.
    pub fn register(&mut self, id: ElementId, config: RevealConfig, now_ms: f64) -> RevealHandle {
        let mut element = RevealableElement::new(config);
        if config.trigger == RevealTrigger::Mount {
            element.triggered_at = Some(now_ms);
        }
        let triggered = element.triggered();
        self.elements.insert(id, element);
        RevealHandle { id, triggered }
    }

    /// Feeds a visibility change. Returns true only when this call started
    /// the element's transition; every other case leaves state untouched.
    pub fn on_intersect(&mut self, id: ElementId, is_intersecting: bool, now_ms: f64) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.elements.get_mut(&id) {
            Some(element) if !element.triggered() => {
                element.triggered_at = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Stops tracking `id`. Returns whether it was registered.
    pub fn unregister(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }

    pub fn get(&self, id: ElementId) -> Option<&RevealableElement> {
        self.elements.get(&id)
    }

    pub fn is_triggered(&self, id: ElementId) -> bool {
        self.elements.get(&id).map_or(false, RevealableElement::triggered)
    }

    pub fn is_settled(&self, id: ElementId, now_ms: f64) -> bool {
        self.elements.get(&id).map_or(false, |element| element.is_settled(now_ms))
    }

    pub fn frame(&self, id: ElementId, now_ms: f64) -> Option<RevealFrame> {
        self.elements.get(&id).map(|element| element.frame_at(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const A: ElementId = ElementId::new(1);
    const B: ElementId = ElementId::new(2);

    fn card() -> RevealConfig {
        RevealConfig::fade_up(20.0, 600)
    }

    #[test]
    fn untriggered_until_first_intersection() {
        let mut controller = ViewportRevealController::new();
        let handle = controller.register(A, card(), 0.0);
        assert!(!handle.triggered());
        assert!(!controller.is_triggered(A));

        assert!(!controller.on_intersect(A, false, 10.0));
        assert!(!controller.is_triggered(A));

        assert!(controller.on_intersect(A, true, 20.0));
        assert!(controller.is_triggered(A));
        assert_eq!(controller.get(A).and_then(|e| e.triggered_at()), Some(20.0));
    }

    #[test]
    fn later_events_do_not_restart_transition() {
        let mut controller = ViewportRevealController::new();
        let _ = controller.register(A, card(), 0.0);
        assert!(controller.on_intersect(A, true, 100.0));

        assert!(!controller.on_intersect(A, false, 200.0));
        assert!(!controller.on_intersect(A, true, 300.0));
        assert!(controller.is_triggered(A));
        assert_eq!(controller.get(A).and_then(|e| e.triggered_at()), Some(100.0));
    }

    #[test]
    fn events_after_unregister_are_ignored() {
        let mut controller = ViewportRevealController::new();
        let _ = controller.register(A, card(), 0.0);
        assert!(controller.unregister(A));

        assert!(!controller.on_intersect(A, true, 50.0));
        assert!(!controller.is_triggered(A));
        assert!(controller.frame(A, 50.0).is_none());
        assert!(controller.get(A).is_none());
        assert!(!controller.unregister(A));
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let mut controller = ViewportRevealController::new();
        assert!(!controller.on_intersect(B, true, 0.0));
        assert!(!controller.unregister(B));
        assert!(controller.frame(B, 0.0).is_none());
    }

    #[test]
    fn delay_and_duration_bound_the_visible_change() {
        let mut controller = ViewportRevealController::new();
        let config = card().with_delay(200);
        let _ = controller.register(A, config, 0.0);
        let t = 1_000.0;
        assert!(controller.on_intersect(A, true, t));

        assert_eq!(controller.frame(A, t), Some(config.initial_frame()));
        assert_eq!(controller.frame(A, t + 199.9), Some(config.initial_frame()));
        assert_eq!(controller.frame(A, t + 200.0), Some(config.initial_frame()));

        let midway = controller.frame(A, t + 500.0).unwrap();
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(midway.offset.y > 0.0 && midway.offset.y < 20.0);
        assert!(!controller.is_settled(A, t + 799.0));

        assert_eq!(controller.frame(A, t + 800.0), Some(config.final_frame()));
        assert!(controller.is_settled(A, t + 800.0));
    }

    #[test]
    fn triggering_one_element_leaves_the_other_alone() {
        let mut controller = ViewportRevealController::new();
        let _ = controller.register(A, card(), 0.0);
        let _ = controller.register(B, card(), 0.0);

        assert!(controller.on_intersect(A, true, 10.0));
        assert!(controller.is_triggered(A));
        assert!(!controller.is_triggered(B));
        assert_eq!(controller.frame(B, 10_000.0), Some(card().initial_frame()));
    }

    #[test]
    fn fade_up_comes_to_rest_at_origin() {
        let mut controller = ViewportRevealController::new();
        let config = RevealConfig::fade_up(20.0, 600);
        assert_eq!(config.initial_frame().offset, Offset::new(0.0, 20.0));
        assert_eq!(config.initial_frame().opacity, 0.0);

        let _ = controller.register(A, config, 0.0);
        assert!(controller.on_intersect(A, true, 0.0));

        let rest = controller.frame(A, 600.0).unwrap();
        assert_eq!(rest.offset, Offset::ZERO);
        assert_eq!(rest.opacity, 1.0);
    }

    #[test]
    fn mount_trigger_starts_at_registration() {
        let mut controller = ViewportRevealController::new();
        let handle = controller.register(A, card().on_mount().with_delay(100), 50.0);
        assert!(handle.triggered());
        assert_eq!(handle.id(), A);
        assert!(controller.is_triggered(A));
        assert!(!controller.on_intersect(A, true, 60.0));
        assert!(controller.is_settled(A, 750.0));
    }

    #[test]
    fn reregistering_resets_the_record() {
        let mut controller = ViewportRevealController::new();
        let _ = controller.register(A, card(), 0.0);
        assert!(controller.on_intersect(A, true, 0.0));

        let _ = controller.register(A, card(), 5.0);
        assert!(!controller.is_triggered(A));
        assert_eq!(controller.get(A).and_then(|e| e.triggered_at()), None);
    }

    #[test]
    fn flattened_config_lands_on_trigger() {
        let mut controller = ViewportRevealController::new();
        let config = card().with_delay(300).flattened();
        let _ = controller.register(A, config, 0.0);
        assert!(controller.on_intersect(A, true, 42.0));
        assert_eq!(controller.frame(A, 42.0), Some(config.final_frame()));
        assert!(controller.is_settled(A, 42.0));
    }

    #[test]
    fn staggered_delay_scales_with_index() {
        assert_eq!(card().staggered(0, 50).delay_ms, 0);
        assert_eq!(card().staggered(3, 50).delay_ms, 150);
        assert_eq!(card().staggered(usize::MAX, 50).delay_ms, u32::MAX);
    }

    #[test]
    fn out_of_range_opacity_never_reaches_a_frame() {
        let mut controller = ViewportRevealController::new();
        let config = RevealConfig {
            opacity_initial: -0.5,
            opacity_final: 1.7,
            ..card()
        };
        assert_eq!(config.initial_frame().opacity, 0.0);
        assert_eq!(config.final_frame().opacity, 1.0);
        assert_eq!(config.final_frame().opacity_css(), "1.000");

        let _ = controller.register(A, config, 0.0);
        assert!(controller.on_intersect(A, true, 0.0));
        for t in [0.0, 150.0, 300.0, 450.0, 600.0] {
            let frame = controller.frame(A, t).unwrap();
            assert!((0.0..=1.0).contains(&frame.opacity), "opacity {} at {}", frame.opacity, t);
        }

        let blank = RevealConfig { opacity_initial: f64::NAN, ..card() };
        assert_eq!(blank.initial_frame().opacity, 0.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_relative_eq!(ease_out_cubic(0.0), 0.0);
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
        assert_relative_eq!(ease_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_out_cubic(4.0), 1.0);
    }

    #[test]
    fn frame_css() {
        let frame = card().initial_frame();
        assert_eq!(frame.transform(), "translate(0.00px, 20.00px)");
        assert_eq!(frame.to_css(), "transform: translate(0.00px, 20.00px); opacity: 0.000;");
    }

    #[test]
    fn element_id_round_trips_through_attribute_text() {
        let id = ElementId::new(17);
        assert_eq!(ElementId::parse(&id.to_string()), Some(id));
        assert_eq!(ElementId::parse("reveal"), None);
    }

    proptest! {
        #[test]
        fn trigger_time_is_the_first_visible_event(
            events in proptest::collection::vec((any::<bool>(), 0.0f64..10_000.0), 0..40)
        ) {
            let mut controller = ViewportRevealController::new();
            let _ = controller.register(A, card(), 0.0);
            let mut now = 0.0;
            let mut first_visible = None;
            for (visible, step) in events {
                now += step;
                let started = controller.on_intersect(A, visible, now);
                if visible && first_visible.is_none() {
                    first_visible = Some(now);
                    prop_assert!(started);
                } else {
                    prop_assert!(!started);
                }
                prop_assert_eq!(controller.is_triggered(A), first_visible.is_some());
            }
            prop_assert_eq!(controller.get(A).and_then(|e| e.triggered_at()), first_visible);
        }

        #[test]
        fn frames_move_monotonically_towards_rest(
            delay in 0u32..1_000,
            duration in 0u32..2_000,
            samples in proptest::collection::vec(0.0f64..4_000.0, 1..30)
        ) {
            let mut controller = ViewportRevealController::new();
            let config = RevealConfig { duration_ms: duration, ..card().with_delay(delay) };
            let _ = controller.register(A, config, 0.0);
            let _ = controller.register(B, config, 0.0);
            prop_assert!(controller.on_intersect(A, true, 0.0));

            let mut samples = samples;
            samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let mut last = config.initial_frame();
            for t in samples {
                let frame = controller.frame(A, t).unwrap();
                prop_assert!(frame.opacity >= last.opacity);
                prop_assert!(frame.offset.y <= last.offset.y);
                prop_assert!((0.0..=1.0).contains(&frame.opacity));
                last = frame;
            }

            // B shares A's config but never became visible.
            prop_assert!(!controller.is_triggered(B));
            prop_assert_eq!(controller.frame(B, 4_000.0), Some(config.initial_frame()));
        }
    }
}
