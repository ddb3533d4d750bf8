//! Board DragDrop
//!
//! Pointer and touch drag tracking for Leptos boards.
//! Mouse drags start after a movement threshold, touch drags after a
//! press-and-hold; the drop target is picked by rectangle intersection.
//!
//! The [`tracker`], [`sensor`], [`collision`] and [`geometry`] modules are
//! DOM-free. [`dom`] binds them to real browser input.

pub mod collision;
pub mod dom;
pub mod geometry;
pub mod sensor;
pub mod tracker;

pub use collision::{rect_intersection, Droppable};
pub use dom::{
    bind_drag_listeners, create_dnd_signals, make_on_mousedown, make_on_touchstart,
    measure_droppables, now_ms, DndSignals, DROPPABLE_ATTR,
};
pub use geometry::{Point, Rect};
pub use sensor::{Activation, ActivationConstraint, PointerKind, SensorConfig};
pub use tracker::{DragEvent, GestureTracker};
