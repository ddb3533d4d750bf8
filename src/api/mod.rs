//! Task API Client
//!
//! Bindings to the remote task store, organized by concern.

mod error;
mod session;
mod task;

use async_trait::async_trait;

use crate::models::{NewTask, Task, TaskId, TaskPatch};

pub use error::{StoreError, StoreResult, GENERIC_ERROR_MESSAGE};
pub use session::{token_from_cookie_header, Session, DEFAULT_AUTH_COOKIE};
pub use task::HttpTaskStore;

/// Remote system of record for tasks
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TaskStore {
    /// All tasks of the signed-in user, in server order
    async fn list(&self) -> StoreResult<Vec<Task>>;

    async fn create(&self, task: &NewTask) -> StoreResult<Task>;

    /// Apply a partial update and return the stored task
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<Task>;

    async fn delete(&self, id: &TaskId) -> StoreResult<()>;
}
