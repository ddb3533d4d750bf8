//! Synchronization Engine
//!
//! Turns drag lifecycle events into optimistic edits of the task
//! collection, and describes the remote writes those edits need.
//!
//! Every `Over` event is a committed transition: the collection is updated
//! immediately and a status change yields a [`PersistStatus`] effect. The
//! caller fires [`persist_status`] for each effect without awaiting it from
//! the gesture pipeline, then folds the [`Reconciliation`] back in.

mod engine;
mod reconcile;
mod target;


pub use engine::{array_move, DragSession, OverPlan, PersistStatus, SyncEngine};
pub use reconcile::{persist_status, Reconciliation};
pub use target::DragTarget;
