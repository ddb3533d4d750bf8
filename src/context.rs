//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::api::{Session, StoreError, TaskStore};
use crate::notify::ToastLevel;
use crate::store::{store_dismiss_toast, store_push_toast, store_replace_tasks, AppStateStoreFields, AppStore};

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: AppStore,
    /// Remote task store (not Send, so kept in local storage)
    api: StoredValue<Rc<dyn TaskStore>, LocalStorage>,
    session: StoredValue<Session>,
    toast_ttl_ms: u32,
}

impl BoardContext {
    pub fn new(store: AppStore, api: Rc<dyn TaskStore>, session: Session, toast_ttl_ms: u32) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
            session: StoredValue::new(session),
            toast_ttl_ms,
        }
    }

    pub fn api(&self) -> Rc<dyn TaskStore> {
        self.api.get_value()
    }

    /// Replace the board with the server's copy
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.api().list().await;
            match result {
                Ok(tasks) => {
                    info!(count = tasks.len(), "board loaded");
                    store_replace_tasks(&ctx.store, tasks);
                }
                Err(e) => ctx.notify_error(&e),
            }
            *ctx.store.loaded().write() = true;
        });
    }

    /// Show a toast that dismisses itself after the configured TTL
    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        let id = store_push_toast(&self.store, level, message);
        let store = self.store;
        let ttl = self.toast_ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message);
    }

    /// Report a store failure; a rejected credential also ends the session
    pub fn notify_error(&self, error: &StoreError) {
        if error.is_authorization() {
            self.expire_session();
            return;
        }
        self.notify(ToastLevel::Error, error.user_message());
    }

    fn expire_session(&self) {
        if self.store.session_expired().get_untracked() {
            return;
        }
        warn!("credential rejected, clearing session");
        self.session.with_value(|s| s.clear());
        *self.store.session_expired().write() = true;
        self.notify(ToastLevel::Info, SESSION_EXPIRED_MESSAGE);
    }
}

pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
