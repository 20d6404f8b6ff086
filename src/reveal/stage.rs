use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::{Rc, Weak};

use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Performance, Window,
};

use crate::config;
use crate::reveal::controller::{ElementId, RevealConfig, RevealFrame, RevealTrigger, ViewportRevealController};
use crate::reveal::error::RevealError;

pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

type IntersectCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type FrameCallback = Closure<dyn FnMut(f64)>;

pub fn apply_frame(node: &HtmlElement, frame: &RevealFrame) -> Result<(), RevealError> {
    let style = node.style();
    style
        .set_property("transform", &frame.transform())
        .map_err(RevealError::dom)?;
    style
        .set_property("opacity", &frame.opacity_css())
        .map_err(RevealError::dom)?;
    Ok(())
}

fn element_id_of(target: &Element) -> Option<ElementId> {
    target
        .get_attribute(REVEAL_ID_ATTR)
        .and_then(|value| ElementId::parse(&value))
}

fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(config::REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}

#[derive(Default)]
struct StageState {
    controller: ViewportRevealController,
    nodes: HashMap<ElementId, HtmlElement>,
    in_flight: BTreeSet<ElementId>,
}

impl StageState {
    fn trigger(&mut self, id: ElementId, is_intersecting: bool, now: f64) -> bool {
        if !self.controller.on_intersect(id, is_intersecting, now) {
            return false;
        }
        debug!("reveal {} triggered at {:.1}ms", id, now);
        self.in_flight.insert(id);
        true
    }

    /// Paints every in-flight element for `now`. Returns whether any are
    /// still moving.
    fn paint(&mut self, now: f64) -> bool {
        let mut landed = Vec::new();
        for &id in &self.in_flight {
            let (Some(frame), Some(node)) = (self.controller.frame(id, now), self.nodes.get(&id)) else {
                landed.push(id);
                continue;
            };
            if let Err(err) = apply_frame(node, &frame) {
                warn!("reveal {}: {}", id, err);
                landed.push(id);
                continue;
            }
            if self.controller.is_settled(id, now) {
                landed.push(id);
            }
        }
        for id in landed {
            self.in_flight.remove(&id);
        }
        !self.in_flight.is_empty()
    }

    fn forget(&mut self, id: ElementId) {
        self.controller.unregister(id);
        self.nodes.remove(&id);
        self.in_flight.remove(&id);
    }
}

type Shared = Rc<RefCell<StageState>>;

struct FrameLoopInner {
    window: Window,
    state: Shared,
    tick: RefCell<Option<FrameCallback>>,
    pending: Cell<Option<i32>>,
}

/// requestAnimationFrame loop that runs only while something is in flight.
#[derive(Clone)]
struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    fn new(window: Window, state: Shared) -> Self {
        let inner = Rc::new(FrameLoopInner {
            window,
            state,
            tick: RefCell::new(None),
            pending: Cell::new(None),
        });

        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            let moving = inner.state.borrow_mut().paint(timestamp);
            if moving {
                if let Err(err) = (FrameLoop { inner }).start() {
                    error!("{}", err);
                }
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.tick.borrow_mut() = Some(tick);

        Self { inner }
    }

    fn start(&self) -> Result<(), RevealError> {
        if self.inner.pending.get().is_some() {
            return Ok(());
        }
        let tick = self.inner.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return Ok(());
        };
        let handle = self
            .inner
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map_err(RevealError::animation_frame)?;
        self.inner.pending.set(Some(handle));
        Ok(())
    }

    fn stop(&self) {
        if let Some(handle) = self.inner.pending.take() {
            if let Err(err) = self.inner.window.cancel_animation_frame(handle) {
                warn!("failed to cancel animation frame: {:?}", err);
            }
        }
    }
}

/// Browser side of the reveal controller: one observer and one frame loop
/// shared by every [`Reveal`](crate::reveal::component::Reveal) on the page.
pub struct RevealStage {
    performance: Performance,
    state: Shared,
    observer: IntersectionObserver,
    frames: FrameLoop,
    reduced_motion: bool,
    next_id: Cell<u64>,
    _on_intersect: IntersectCallback,
}

impl RevealStage {
    pub fn new() -> Result<Self, RevealError> {
        let window = web_sys::window().ok_or(RevealError::NoWindow)?;
        let performance = window.performance().ok_or(RevealError::NoPerformance)?;
        let state: Shared = Rc::new(RefCell::new(StageState::default()));
        let frames = FrameLoop::new(window.clone(), state.clone());

        let on_intersect = {
            let state = state.clone();
            let frames = frames.clone();
            let performance = performance.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let now = performance.now();
                let mut started = false;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = element_id_of(&target) else {
                        continue;
                    };
                    if state.borrow_mut().trigger(id, entry.is_intersecting(), now) {
                        // Reveals fire once, no need to keep watching.
                        observer.unobserve(&target);
                        started = true;
                    }
                }
                if started {
                    if let Err(err) = frames.start() {
                        error!("{}", err);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(RevealError::observer)?;

        let reduced_motion = prefers_reduced_motion(&window);
        info!("Reveal stage ready (reduced motion: {})", reduced_motion);

        Ok(Self {
            performance,
            state,
            observer,
            frames,
            reduced_motion,
            next_id: Cell::new(0),
            _on_intersect: on_intersect,
        })
    }

    /// Registers `node` and paints its initial frame. Observation stops
    /// when the returned subscription is dropped.
    pub fn attach(&self, node: HtmlElement, config: RevealConfig) -> Result<Subscription, RevealError> {
        let config = if self.reduced_motion { config.flattened() } else { config };
        let id = ElementId::new(self.next_id.get());
        self.next_id.set(id.raw() + 1);

        node.set_attribute(REVEAL_ID_ATTR, &id.to_string())
            .map_err(RevealError::dom)?;
        apply_frame(&node, &config.initial_frame())?;

        let now = self.performance.now();
        {
            let mut state = self.state.borrow_mut();
            let handle = state.controller.register(id, config, now);
            debug!("reveal {} registered ({:?})", handle.id(), config.trigger);
            if handle.triggered() {
                state.in_flight.insert(id);
            }
            state.nodes.insert(id, node.clone());
        }

        let subscription = Subscription {
            id,
            node,
            observer: self.observer.clone(),
            state: Rc::downgrade(&self.state),
        };

        match config.trigger {
            RevealTrigger::InView => self.observer.observe(&subscription.node),
            RevealTrigger::Mount => self.frames.start()?,
        }
        Ok(subscription)
    }
}

impl Drop for RevealStage {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.frames.stop();
        info!("Reveal stage torn down");
    }
}

/// Keeps one element registered with the stage.
#[must_use]
pub struct Subscription {
    id: ElementId,
    node: HtmlElement,
    observer: IntersectionObserver,
    state: Weak<RefCell<StageState>>,
}

impl Subscription {
    pub fn unregister(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.unobserve(&self.node);
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().forget(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(id: ElementId) -> StageState {
        let mut state = StageState::default();
        let _ = state.controller.register(id, RevealConfig::fade_up(20.0, 600), 0.0);
        state
    }

    #[test]
    fn trigger_puts_element_in_flight_once() {
        let id = ElementId::new(1);
        let mut state = registered(id);

        assert!(!state.trigger(id, false, 5.0));
        assert!(state.in_flight.is_empty());

        assert!(state.trigger(id, true, 10.0));
        assert!(state.in_flight.contains(&id));
        assert!(!state.trigger(id, true, 20.0));
        assert_eq!(state.in_flight.len(), 1);
    }

    #[test]
    fn unknown_ids_never_enter_flight() {
        let mut state = registered(ElementId::new(1));
        assert!(!state.trigger(ElementId::new(2), true, 10.0));
        assert!(state.in_flight.is_empty());
    }

    #[test]
    fn paint_drops_elements_without_a_node() {
        let id = ElementId::new(1);
        let mut state = registered(id);
        assert!(state.trigger(id, true, 10.0));

        assert!(!state.paint(30.0));
        assert!(state.in_flight.is_empty());
        // The record itself stays triggered.
        assert!(state.controller.is_triggered(id));
    }

    #[test]
    fn forget_mid_flight_abandons_the_transition() {
        let id = ElementId::new(1);
        let mut state = registered(id);
        assert!(state.trigger(id, true, 10.0));

        state.forget(id);
        assert!(state.in_flight.is_empty());
        assert!(state.controller.get(id).is_none());
        assert!(!state.paint(300.0));
        assert!(!state.trigger(id, true, 400.0));
    }

    #[test]
    fn paint_on_empty_stage_stops_the_loop() {
        let mut state = StageState::default();
        assert!(!state.paint(0.0));
    }
}
