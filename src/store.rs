//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The task collection here is the board's only copy; drag handling and
//! CRUD forms mutate it through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::notify::{ToastLevel, ToastQueue};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached task collection; order drives card position within a column
    pub tasks: Vec<Task>,
    /// Visible notifications
    pub toasts: ToastQueue,
    /// First fetch has finished (successfully or not)
    pub loaded: bool,
    /// Set once the API rejected our credential
    pub session_expired: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection with the server's copy
pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Append a newly created task
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated: Task) {
    if let Some(task) = store.tasks().write().iter_mut().find(|t| t.id == updated.id) {
        *task = updated;
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: &TaskId) {
    store.tasks().write().retain(|t| &t.id != id);
}

pub fn store_push_toast(store: &AppStore, level: ToastLevel, message: impl Into<String>) -> u32 {
    store.toasts().write().push(level, message)
}

pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().dismiss(id);
}
