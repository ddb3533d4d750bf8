//! Toast Host Component

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || store.toasts().with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class() role="status">
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
