use tracing::{debug, info};

use super::target::DragTarget;
use crate::models::{Task, TaskId, TaskStatus};

/// The gesture in flight
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub active: TaskId,
    /// Status when the gesture began
    pub source_status: TaskStatus,
    /// Last target processed; a repeat of the same card is skipped
    pub current_target: Option<DragTarget>,
}

/// Remote write owed after an optimistic status change
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistStatus {
    pub task_id: TaskId,
    pub status: TaskStatus,
}

/// Drag state machine: Idle (no session) or Dragging
#[derive(Debug, Default)]
pub struct SyncEngine {
    session: Option<DragSession>,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn active_task_id(&self) -> Option<&TaskId> {
        self.session.as_ref().map(|s| &s.active)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Enter Dragging for `id`; stays Idle if no such task exists
    pub fn drag_start(&mut self, tasks: &[Task], id: &TaskId) -> bool {
        let Some(task) = tasks.iter().find(|t| &t.id == id) else {
            debug!(%id, "drag start for unknown task ignored");
            return false;
        };
        debug!(%id, status = %task.status, "drag started");
        self.session = Some(DragSession {
            active: id.clone(),
            source_status: task.status,
            current_target: None,
        });
        true
    }

    /// Apply one hover update to `tasks`
    ///
    /// Returns the status write to persist when the active task changed
    /// bucket. A `None` target leaves the collection untouched.
    pub fn drag_over(
        &mut self,
        tasks: &mut Vec<Task>,
        active: &TaskId,
        target: Option<DragTarget>,
    ) -> Option<PersistStatus> {
        let plan = self.plan_over(tasks, active, target)?;
        plan.apply(tasks)
    }

    /// Decide what a hover update would do without touching `tasks`
    ///
    /// `None` means the collection stays as it is. Only card targets are
    /// deduplicated against the last target: a column is a no-op exactly
    /// when the task already has that status. Leaving every target resets
    /// the dedupe, so coming back counts as a new entry.
    pub fn plan_over(&mut self, tasks: &[Task], active: &TaskId, target: Option<DragTarget>) -> Option<OverPlan> {
        let session = self.session.as_mut().filter(|s| &s.active == active);
        let Some(target) = target else {
            if let Some(session) = session {
                session.current_target = None;
            }
            return None;
        };
        if let Some(session) = session {
            if matches!(target, DragTarget::Task(_)) && session.current_target.as_ref() == Some(&target) {
                return None;
            }
            session.current_target = Some(target.clone());
        }
        plan(tasks, active, &target)
    }

    pub fn drag_end(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            debug!(id = %s.active, "drag ended");
        }
        session
    }

    /// Leave Dragging; moves already applied stay applied
    pub fn drag_cancel(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        if let Some(s) = &session {
            debug!(id = %s.active, "drag cancelled");
        }
        session
    }
}

fn position(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|t| &t.id == id)
}

fn plan(tasks: &[Task], active: &TaskId, target: &DragTarget) -> Option<OverPlan> {
    let Some(from) = position(tasks, active) else {
        debug!(%active, "drag over for unknown task ignored");
        return None;
    };
    let current = tasks[from].status;

    let (to, status) = match target {
        DragTarget::Bucket(status) => (from, *status),
        DragTarget::Task(over) => {
            let Some(to) = position(tasks, over) else {
                debug!(%over, "drag over unknown card ignored");
                return None;
            };
            (to, tasks[to].status)
        }
    };
    let migrate = (status != current).then_some(status);
    if from == to && migrate.is_none() {
        return None;
    }
    Some(OverPlan {
        task_id: active.clone(),
        from,
        to,
        migrate,
    })
}

/// A hover update against a specific collection snapshot
///
/// Apply it to the same collection it was planned on, before anything
/// else mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverPlan {
    task_id: TaskId,
    from: usize,
    to: usize,
    migrate: Option<TaskStatus>,
}

impl OverPlan {
    pub fn apply(self, tasks: &mut Vec<Task>) -> Option<PersistStatus> {
        if let (Some(status), Some(task)) = (self.migrate, tasks.get_mut(self.from)) {
            task.status = status;
        }
        array_move(tasks, self.from, self.to);
        let status = self.migrate?;
        info!(id = %self.task_id, %status, "task moved to column");
        Some(PersistStatus {
            task_id: self.task_id,
            status,
        })
    }
}

/// Move the element at `from` to index `to`, shifting the ones between
///
/// Out-of-range indices leave the slice unchanged.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_move_forward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        array_move(&mut v, 0, 2);
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_array_move_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        array_move(&mut v, 3, 1);
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        let mut v = vec![1, 2, 3];
        array_move(&mut v, 1, 7);
        array_move(&mut v, 9, 0);
        assert_eq!(v, vec![1, 2, 3]);
    }
}
