//! Gesture Tracker
//!
//! Turns raw pointer samples into drag lifecycle events.
//! Pure state machine: callers feed it positions and timestamps, it never
//! touches the DOM.

use tracing::debug;

use crate::collision::{rect_intersection, Droppable};
use crate::geometry::{Point, Rect};
use crate::sensor::{Activation, ActivationConstraint, PointerKind, SensorConfig};

/// Drag lifecycle event
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent<Id> {
    /// Activation threshold crossed
    Start { active: Id },
    /// Emitted on every movement while active; `over` is `None` when the
    /// dragged card intersects nothing
    Over { active: Id, over: Option<Id> },
    /// Pointer released while active
    End { active: Id, over: Option<Id> },
    /// Gesture aborted while active (Escape, touchcancel, blur)
    Cancel { active: Id },
}

#[derive(Clone, Debug)]
struct Gesture<Id> {
    kind: PointerKind,
    id: Id,
    origin: Point,
    pointer: Point,
    rect: Rect,
    started_at: f64,
}

impl<Id> Gesture<Id> {
    fn delta(&self) -> Point {
        self.pointer.delta_from(self.origin)
    }

    fn dragged_rect(&self) -> Rect {
        self.rect.translate(self.delta())
    }
}

#[derive(Clone, Debug)]
enum Phase<Id> {
    Idle,
    Pending {
        gesture: Gesture<Id>,
        constraint: ActivationConstraint,
    },
    Active {
        gesture: Gesture<Id>,
        over: Option<Id>,
    },
}

impl<Id> Default for Phase<Id> {
    fn default() -> Self {
        Phase::Idle
    }
}

/// Single-gesture drag tracker
#[derive(Clone, Debug)]
pub struct GestureTracker<Id> {
    sensors: SensorConfig,
    phase: Phase<Id>,
}

impl<Id> Default for GestureTracker<Id> {
    fn default() -> Self {
        Self::new(SensorConfig::default())
    }
}

impl<Id> GestureTracker<Id> {
    pub fn new(sensors: SensorConfig) -> Self {
        Self {
            sensors,
            phase: Phase::Idle,
        }
    }

    pub fn sensors(&self) -> SensorConfig {
        self.sensors
    }
}

impl<Id: Clone + PartialEq + std::fmt::Debug> GestureTracker<Id> {
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Id of the card being dragged, once activated
    pub fn active_id(&self) -> Option<&Id> {
        match &self.phase {
            Phase::Active { gesture, .. } => Some(&gesture.id),
            _ => None,
        }
    }

    pub fn over_id(&self) -> Option<&Id> {
        match &self.phase {
            Phase::Active { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Pointer travel since the press (zero unless active)
    pub fn pointer_delta(&self) -> Point {
        match &self.phase {
            Phase::Active { gesture, .. } => gesture.delta(),
            _ => Point::default(),
        }
    }

    /// Bounding box of the dragged card at its current position
    pub fn dragged_rect(&self) -> Option<Rect> {
        match &self.phase {
            Phase::Active { gesture, .. } => Some(gesture.dragged_rect()),
            _ => None,
        }
    }

    /// Kind of the gesture in flight, pending or active
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { gesture, .. } | Phase::Active { gesture, .. } => Some(gesture.kind),
        }
    }

    /// Record a press on a draggable card
    ///
    /// Returns `false` (and changes nothing) while another gesture is in flight.
    pub fn pointer_down(&mut self, kind: PointerKind, id: Id, at: Point, rect: Rect, now: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = Phase::Pending {
            gesture: Gesture {
                kind,
                id,
                origin: at,
                pointer: at,
                rect,
                started_at: now,
            },
            constraint: self.sensors.constraint_for(kind),
        };
        true
    }

    /// Feed a movement sample
    pub fn pointer_move(
        &mut self,
        kind: PointerKind,
        at: Point,
        now: f64,
        droppables: &[Droppable<Id>],
    ) -> Vec<DragEvent<Id>> {
        if self.pointer_kind() != Some(kind) {
            return Vec::new();
        }
        match &mut self.phase {
            Phase::Idle => Vec::new(),
            Phase::Pending { gesture, .. } => {
                gesture.pointer = at;
                self.evaluate_pending(now, droppables)
            }
            Phase::Active { gesture, over } => {
                gesture.pointer = at;
                let next = rect_intersection(&gesture.dragged_rect(), droppables);
                *over = next.clone();
                vec![DragEvent::Over {
                    active: gesture.id.clone(),
                    over: next,
                }]
            }
        }
    }

    /// Re-check a pending press without movement (touch hold timer)
    pub fn tick(&mut self, now: f64, droppables: &[Droppable<Id>]) -> Vec<DragEvent<Id>> {
        if self.is_pending() {
            self.evaluate_pending(now, droppables)
        } else {
            Vec::new()
        }
    }

    /// Pointer released; emits `End` only if the gesture had activated
    pub fn pointer_up(&mut self, kind: PointerKind) -> Option<DragEvent<Id>> {
        if self.pointer_kind() != Some(kind) {
            return None;
        }
        match std::mem::take(&mut self.phase) {
            Phase::Active { gesture, over } => Some(DragEvent::End {
                active: gesture.id,
                over,
            }),
            _ => None,
        }
    }

    /// Abort whatever is in flight; emits `Cancel` only if the gesture had activated
    pub fn cancel(&mut self) -> Option<DragEvent<Id>> {
        match std::mem::take(&mut self.phase) {
            Phase::Active { gesture, .. } => {
                debug!(active = ?gesture.id, "drag cancelled");
                Some(DragEvent::Cancel { active: gesture.id })
            }
            _ => None,
        }
    }

    fn evaluate_pending(&mut self, now: f64, droppables: &[Droppable<Id>]) -> Vec<DragEvent<Id>> {
        let Phase::Pending { gesture, constraint } = &self.phase else {
            return Vec::new();
        };
        match constraint.evaluate(gesture.delta(), now - gesture.started_at) {
            Activation::Wait => Vec::new(),
            Activation::Abort => {
                debug!(id = ?gesture.id, "pending gesture abandoned");
                self.phase = Phase::Idle;
                Vec::new()
            }
            Activation::Activate => {
                let gesture = gesture.clone();
                let over = rect_intersection(&gesture.dragged_rect(), droppables);
                debug!(active = ?gesture.id, kind = ?gesture.kind, "drag activated");
                let events = vec![
                    DragEvent::Start {
                        active: gesture.id.clone(),
                    },
                    DragEvent::Over {
                        active: gesture.id.clone(),
                        over: over.clone(),
                    },
                ];
                self.phase = Phase::Active { gesture, over };
                events
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_rect() -> Rect {
        Rect::new(0.0, 0.0, 280.0, 100.0)
    }

    fn board() -> Vec<Droppable<String>> {
        vec![
            Droppable::new("todo".to_string(), Rect::new(0.0, 0.0, 300.0, 900.0)),
            Droppable::new("done".to_string(), Rect::new(320.0, 0.0, 300.0, 900.0)),
        ]
    }

    fn pressed(kind: PointerKind) -> GestureTracker<String> {
        let mut tracker = GestureTracker::default();
        assert!(tracker.pointer_down(kind, "a".to_string(), Point::new(50.0, 50.0), card_rect(), 0.0));
        tracker
    }

    #[test]
    fn test_mouse_click_never_starts_drag() {
        let mut tracker = pressed(PointerKind::Mouse);
        let events = tracker.pointer_move(PointerKind::Mouse, Point::new(53.0, 52.0), 5.0, &board());
        assert!(events.is_empty());
        assert!(tracker.is_pending());
        assert_eq!(tracker.pointer_up(PointerKind::Mouse), None);
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_mouse_drag_activates_and_reports_target() {
        let mut tracker = pressed(PointerKind::Mouse);
        let events = tracker.pointer_move(PointerKind::Mouse, Point::new(70.0, 50.0), 5.0, &board());
        assert_eq!(
            events,
            vec![
                DragEvent::Start { active: "a".to_string() },
                DragEvent::Over { active: "a".to_string(), over: Some("todo".to_string()) },
            ]
        );
        assert_eq!(tracker.active_id(), Some(&"a".to_string()));

        // Drag far enough right to land in "done"
        let events = tracker.pointer_move(PointerKind::Mouse, Point::new(450.0, 50.0), 10.0, &board());
        assert_eq!(
            events,
            vec![DragEvent::Over { active: "a".to_string(), over: Some("done".to_string()) }]
        );
        assert_eq!(tracker.pointer_delta(), Point::new(400.0, 0.0));

        assert_eq!(
            tracker.pointer_up(PointerKind::Mouse),
            Some(DragEvent::End { active: "a".to_string(), over: Some("done".to_string()) })
        );
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_over_reported_continuously_for_same_target() {
        let mut tracker = pressed(PointerKind::Mouse);
        tracker.pointer_move(PointerKind::Mouse, Point::new(70.0, 50.0), 5.0, &board());
        let again = tracker.pointer_move(PointerKind::Mouse, Point::new(71.0, 50.0), 6.0, &board());
        assert_eq!(again.len(), 1);
        assert!(matches!(&again[0], DragEvent::Over { over: Some(t), .. } if t == "todo"));
    }

    #[test]
    fn test_outside_every_droppable_reports_none() {
        let mut tracker = pressed(PointerKind::Mouse);
        tracker.pointer_move(PointerKind::Mouse, Point::new(70.0, 50.0), 5.0, &board());
        let events = tracker.pointer_move(PointerKind::Mouse, Point::new(50.0, 5000.0), 6.0, &board());
        assert_eq!(events, vec![DragEvent::Over { active: "a".to_string(), over: None }]);
    }

    #[test]
    fn test_touch_hold_activates_on_tick() {
        let mut tracker = pressed(PointerKind::Touch);
        assert!(tracker.tick(100.0, &board()).is_empty());
        let events = tracker.tick(260.0, &board());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DragEvent::Start { active: "a".to_string() });
    }

    #[test]
    fn test_touch_scroll_abandons_gesture() {
        let mut tracker = pressed(PointerKind::Touch);
        let events = tracker.pointer_move(PointerKind::Touch, Point::new(50.0, 90.0), 40.0, &board());
        assert!(events.is_empty());
        assert!(tracker.is_idle());
        assert!(tracker.tick(300.0, &board()).is_empty());
    }

    #[test]
    fn test_second_press_is_ignored_while_in_flight() {
        let mut tracker = pressed(PointerKind::Mouse);
        assert!(!tracker.pointer_down(PointerKind::Touch, "b".to_string(), Point::default(), card_rect(), 1.0));
        tracker.pointer_move(PointerKind::Mouse, Point::new(70.0, 50.0), 5.0, &board());
        assert_eq!(tracker.active_id(), Some(&"a".to_string()));
    }

    #[test]
    fn test_foreign_pointer_kind_is_ignored() {
        let mut tracker = pressed(PointerKind::Touch);
        let events = tracker.pointer_move(PointerKind::Mouse, Point::new(500.0, 500.0), 10.0, &board());
        assert!(events.is_empty());
        assert!(tracker.is_pending());
        assert_eq!(tracker.pointer_up(PointerKind::Mouse), None);
        assert!(tracker.is_pending());
    }

    #[test]
    fn test_cancel_only_reports_active_gestures() {
        let mut tracker = pressed(PointerKind::Mouse);
        assert_eq!(tracker.cancel(), None);
        assert!(tracker.is_idle());

        let mut tracker = pressed(PointerKind::Mouse);
        tracker.pointer_move(PointerKind::Mouse, Point::new(70.0, 50.0), 5.0, &board());
        assert_eq!(tracker.cancel(), Some(DragEvent::Cancel { active: "a".to_string() }));
        assert!(tracker.is_idle());
    }
}
