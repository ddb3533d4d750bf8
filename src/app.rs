//! Task Board App
//!
//! Root component: wires the store, API client and context, then lays out
//! the add form, the board and the toast host.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{info, warn};

use crate::api::{HttpTaskStore, Session, TaskStore};
use crate::components::{BoardView, NewTaskForm, ToastHost};
use crate::config::AppConfig;
use crate::context::BoardContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let session = Session::from_cookie(&config.auth_cookie);
    let api: Rc<dyn TaskStore> = Rc::new(HttpTaskStore::new(config.api_base_url.clone(), session.clone()));
    let ctx = BoardContext::new(store, api, session.clone(), config.toast_ttl_ms);
    provide_context(ctx);

    // Load tasks on mount
    if session.is_authenticated() {
        info!(api = %config.api_base_url, "loading board");
        ctx.reload();
    } else {
        warn!(cookie = %config.auth_cookie, "no credential found");
        *store.session_expired().write() = true;
        *store.loaded().write() = true;
    }

    let sensors = config.sensors;

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Task Board"</h1>
                <p class="task-count">
                    {move || store.tasks().with(|t| format!("{} tasks", t.len()))}
                </p>
            </header>
            <Show
                when=move || !store.session_expired().get()
                fallback=|| view! {
                    <p class="signed-out">"You are signed out. Please log in to manage your tasks."</p>
                }
            >
                <NewTaskForm />
                <Show when=move || !store.loaded().get()>
                    <p class="loading">"Loading tasks..."</p>
                </Show>
            </Show>
            <BoardView sensors=sensors />
            <ToastHost />
        </div>
    }
}
