//! Activation Sensors
//!
//! Decide when a pressed pointer turns into a drag.
//! Mouse input waits for movement; touch input waits for a press-and-hold.

use serde::Deserialize;

use crate::geometry::Point;

/// Input device that started a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Rule a pending gesture must satisfy before it becomes a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivationConstraint {
    /// Activate once the pointer travels further than `distance` px
    Distance { distance: f64 },
    /// Activate after `delay_ms` of holding, unless the pointer strays more
    /// than `tolerance` px first (in which case the gesture is abandoned)
    Delay { delay_ms: f64, tolerance: f64 },
}

/// What a pending gesture should do after an input sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Wait,
    Activate,
    Abort,
}

impl ActivationConstraint {
    /// Evaluate the constraint for a pointer at `delta` from its down position,
    /// `elapsed_ms` after the press
    pub fn evaluate(&self, delta: Point, elapsed_ms: f64) -> Activation {
        match *self {
            ActivationConstraint::Distance { distance } => {
                if delta.length() > distance {
                    Activation::Activate
                } else {
                    Activation::Wait
                }
            }
            ActivationConstraint::Delay { delay_ms, tolerance } => {
                if delta.length() > tolerance {
                    Activation::Abort
                } else if elapsed_ms >= delay_ms {
                    Activation::Activate
                } else {
                    Activation::Wait
                }
            }
        }
    }
}

/// Per-device activation settings
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Mouse travel (px) before a drag starts
    pub mouse_distance: f64,
    /// Touch hold time (ms) before a drag starts
    pub touch_delay_ms: f64,
    /// Touch travel (px) tolerated during the hold
    pub touch_tolerance: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mouse_distance: 8.0,
            touch_delay_ms: 250.0,
            touch_tolerance: 5.0,
        }
    }
}

impl SensorConfig {
    pub fn constraint_for(&self, kind: PointerKind) -> ActivationConstraint {
        match kind {
            PointerKind::Mouse => ActivationConstraint::Distance {
                distance: self.mouse_distance,
            },
            PointerKind::Touch => ActivationConstraint::Delay {
                delay_ms: self.touch_delay_ms,
                tolerance: self.touch_tolerance,
            },
        }
    }
}
