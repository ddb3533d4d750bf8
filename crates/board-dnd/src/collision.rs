//! Collision Detection
//!
//! Picks the drop target under the dragged card by rectangle intersection.

use crate::geometry::Rect;

/// A measured drop region
#[derive(Clone, Debug, PartialEq)]
pub struct Droppable<Id> {
    pub id: Id,
    pub rect: Rect,
}

impl<Id> Droppable<Id> {
    pub fn new(id: Id, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// Id of the droppable with the greatest intersection ratio against `dragged`
///
/// Ties keep the earlier droppable. Returns `None` when nothing intersects.
pub fn rect_intersection<Id: Clone>(dragged: &Rect, droppables: &[Droppable<Id>]) -> Option<Id> {
    let mut best: Option<(&Droppable<Id>, f64)> = None;
    for droppable in droppables {
        let ratio = dragged.intersection_ratio(&droppable.rect);
        if ratio <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_ratio)) if best_ratio >= ratio => {}
            _ => best = Some((droppable, ratio)),
        }
    }
    best.map(|(droppable, _)| droppable.id.clone())
}
