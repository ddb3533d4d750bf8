use tracing::{debug, info, warn};

use super::engine::PersistStatus;
use crate::api::{StoreError, TaskStore};
use crate::models::{Task, TaskPatch};

/// Outcome of persisting one optimistic status change
#[derive(Clone, Debug, PartialEq)]
pub enum Reconciliation {
    /// Server accepted the write; local state already matches
    Confirmed,
    /// Write failed; `tasks` is the server's authoritative collection
    Restored { error: StoreError, tasks: Vec<Task> },
    /// Write failed and so did the refetch; local state stays as is
    Unrecovered {
        error: StoreError,
        refetch_error: StoreError,
    },
}

impl Reconciliation {
    /// Fold into the local collection
    ///
    /// The rejected write was already reported through `on_rejected`; what
    /// comes back is the refetch failure, if there was one.
    pub fn apply(self, tasks: &mut Vec<Task>) -> Option<StoreError> {
        match self {
            Reconciliation::Confirmed => None,
            Reconciliation::Restored { tasks: fresh, .. } => {
                *tasks = fresh;
                None
            }
            Reconciliation::Unrecovered { refetch_error, .. } => Some(refetch_error),
        }
    }
}

/// Send a status write; on failure, refetch the whole collection once
///
/// `on_rejected` sees the update error before the refetch starts, so the
/// user hears about it even when the refetch is slow.
pub async fn persist_status<S, F>(store: &S, effect: &PersistStatus, on_rejected: F) -> Reconciliation
where
    S: TaskStore + ?Sized,
    F: FnOnce(&StoreError),
{
    let patch = TaskPatch::status(effect.status);
    let error = match store.update(&effect.task_id, &patch).await {
        Ok(_) => {
            debug!(id = %effect.task_id, status = %effect.status, "status change persisted");
            return Reconciliation::Confirmed;
        }
        Err(e) => e,
    };

    warn!(id = %effect.task_id, status = %effect.status, error = %error, "status change rejected, refetching");
    on_rejected(&error);
    match store.list().await {
        Ok(tasks) => {
            info!(count = tasks.len(), "board restored from server");
            Reconciliation::Restored { error, tasks }
        }
        Err(refetch_error) => {
            warn!(error = %refetch_error, "refetch after failed status change also failed");
            Reconciliation::Unrecovered {
                error,
                refetch_error,
            }
        }
    }
}
