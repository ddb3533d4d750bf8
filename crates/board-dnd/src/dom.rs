//! DOM Bindings
//!
//! Wires document-level mouse/touch/keyboard listeners into a
//! [`GestureTracker`] and mirrors its state into Leptos signals.
//! Droppables are any elements carrying `data-droppable="<id>"`.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::collision::Droppable;
use crate::geometry::{Point, Rect};
use crate::sensor::{PointerKind, SensorConfig};
use crate::tracker::{DragEvent, GestureTracker};

/// Attribute naming a drop region's id
pub const DROPPABLE_ATTR: &str = "data-droppable";

/// Presses on these never start a drag
const NO_DRAG_SELECTOR: &str = "button, input, textarea, select, [data-no-drag]";

type DragHandler = Rc<dyn Fn(DragEvent<String>)>;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card currently lifted (after activation)
    pub active_id: RwSignal<Option<String>>,
    /// Droppable currently under the lifted card
    pub over_id: RwSignal<Option<String>>,
    /// Where the lifted card is drawn
    pub dragged_rect: RwSignal<Option<Rect>>,
    tracker: StoredValue<GestureTracker<String>>,
    handler: StoredValue<Option<DragHandler>, LocalStorage>,
}

pub fn create_dnd_signals(sensors: SensorConfig) -> DndSignals {
    DndSignals {
        active_id: RwSignal::new(None),
        over_id: RwSignal::new(None),
        dragged_rect: RwSignal::new(None),
        tracker: StoredValue::new(GestureTracker::new(sensors)),
        handler: StoredValue::new_local(None),
    }
}

impl DndSignals {
    /// Abort the gesture in flight, if any
    pub fn cancel(&self) {
        let event = self.tracker.try_update_value(|t| t.cancel()).flatten();
        self.publish(event.into_iter().collect());
    }

    fn press(&self, kind: PointerKind, id: String, at: Point, rect: Rect) -> bool {
        let now = now_ms();
        self.tracker
            .try_update_value(|t| t.pointer_down(kind, id, at, rect, now))
            .unwrap_or(false)
    }

    /// Run one tracker step against freshly measured droppables
    fn feed<F>(&self, step: F)
    where
        F: FnOnce(&mut GestureTracker<String>, f64, &[Droppable<String>]) -> Vec<DragEvent<String>>,
    {
        // Listeners outlive the board; a disposed tracker counts as idle
        if self.tracker.try_with_value(|t| t.is_idle()).unwrap_or(true) {
            return;
        }
        let droppables = measure_droppables();
        let now = now_ms();
        let events = self
            .tracker
            .try_update_value(|t| step(t, now, &droppables))
            .unwrap_or_default();
        self.publish(events);
    }

    fn publish(&self, events: Vec<DragEvent<String>>) {
        let Some((active, over, rect)) = self.tracker.try_with_value(|t| {
            (t.active_id().cloned(), t.over_id().cloned(), t.dragged_rect())
        }) else {
            return;
        };
        if self.active_id.get_untracked() != active {
            self.active_id.set(active);
        }
        if self.over_id.get_untracked() != over {
            self.over_id.set(over);
        }
        self.dragged_rect.set(rect);

        let Some(handler) = self.handler.try_get_value().flatten() else {
            return;
        };
        for event in events {
            handler(event);
        }
    }
}

/// Milliseconds from the page's monotonic clock
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn rect_of(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Measure every `[data-droppable]` element in document order
pub fn measure_droppables() -> Vec<Droppable<String>> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(&format!("[{}]", DROPPABLE_ATTR)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute(DROPPABLE_ATTR)?;
            Some(Droppable::new(id, rect_of(&el)))
        })
        .collect()
}

fn starts_on_control(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(NO_DRAG_SELECTOR).ok().flatten())
        .is_some()
}

fn current_target_rect(ev: &web_sys::Event) -> Option<Rect> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| rect_of(&el))
}

/// Create mousedown handler for a draggable card
pub fn make_on_mousedown(dnd: DndSignals, id: String) -> impl Fn(web_sys::MouseEvent) + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || starts_on_control(&ev) {
            return;
        }
        let Some(rect) = current_target_rect(&ev) else {
            return;
        };
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        dnd.press(PointerKind::Mouse, id.clone(), at, rect);
    }
}

/// Create touchstart handler for a draggable card
///
/// Schedules a re-check once the hold delay has passed so a motionless
/// press still activates.
pub fn make_on_touchstart(dnd: DndSignals, id: String) -> impl Fn(web_sys::TouchEvent) + 'static {
    move |ev: web_sys::TouchEvent| {
        if starts_on_control(&ev) {
            return;
        }
        let Some(touch) = ev.touches().item(0) else {
            return;
        };
        let Some(rect) = current_target_rect(&ev) else {
            return;
        };
        let at = Point::new(touch.client_x() as f64, touch.client_y() as f64);
        if dnd.press(PointerKind::Touch, id.clone(), at, rect) {
            if let Some(delay) = dnd.tracker.try_with_value(|t| t.sensors().touch_delay_ms) {
                schedule_hold_check(dnd, delay);
            }
        }
    }
}

fn schedule_hold_check(dnd: DndSignals, delay_ms: f64) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn FnMut()>::new(move || {
        dnd.feed(|t, now, droppables| t.tick(now, droppables));
    });
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms.ceil() as i32 + 1,
    );
    cb.forget();
}

fn touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    ev.touches()
        .item(0)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// Bind document listeners that drive the tracker and report lifecycle events
///
/// Call once per board; listeners live for the rest of the page.
pub fn bind_drag_listeners<F>(dnd: DndSignals, on_event: F)
where
    F: Fn(DragEvent<String>) + 'static,
{
    let handler: DragHandler = Rc::new(on_event);
    dnd.handler.set_value(Some(handler));

    let Some(win) = web_sys::window() else {
        return;
    };
    let Some(doc) = win.document() else {
        return;
    };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        dnd.feed(|t, now, droppables| t.pointer_move(PointerKind::Mouse, at, now, droppables));
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let event = dnd.tracker.try_update_value(|t| t.pointer_up(PointerKind::Mouse)).flatten();
        dnd.publish(event.into_iter().collect());
    });

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        // Hold the page still while a card is lifted
        if dnd.tracker.try_with_value(|t| t.active_id().is_some()).unwrap_or(false) {
            ev.prevent_default();
        }
        if let Some(at) = touch_point(&ev) {
            dnd.feed(|t, now, droppables| t.pointer_move(PointerKind::Touch, at, now, droppables));
        }
    });

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        let event = dnd.tracker.try_update_value(|t| t.pointer_up(PointerKind::Touch)).flatten();
        dnd.publish(event.into_iter().collect());
    });

    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        dnd.cancel();
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            dnd.cancel();
        }
    });

    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        dnd.cancel();
    });

    let active_opts = web_sys::AddEventListenerOptions::new();
    active_opts.set_passive(false);

    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touchmove.as_ref().unchecked_ref(),
        &active_opts,
    );
    let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchcancel", on_touchcancel.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());

    on_mousemove.forget();
    on_mouseup.forget();
    on_touchmove.forget();
    on_touchend.forget();
    on_touchcancel.forget();
    on_keydown.forget();
    on_blur.forget();
}
