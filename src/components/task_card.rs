//! Task Card Component
//!
//! A draggable card that is also a drop target for other cards.

use board_dnd::{make_on_mousedown, make_on_touchstart, DndSignals};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_board_context;
use crate::models::{Task, TaskPatch};
use crate::notify::{ToastLevel, TASK_DELETED_MESSAGE, TASK_EDITED_MESSAGE};
use crate::store::{store_remove_task, store_update_task};

#[component]
pub fn TaskCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let ctx = use_board_context();
    let id = task.id.clone();
    let dom_id = id.as_str().to_string();

    let (editing, set_editing) = signal(false);
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, dom_id.clone());
    let on_touchstart = make_on_touchstart(dnd, dom_id.clone());

    let card_class = {
        let dom_id = dom_id.clone();
        move || {
            let mut c = String::from("task-card");
            if dnd.active_id.with(|a| a.as_deref() == Some(dom_id.as_str())) {
                c.push_str(" dragging");
            }
            if dnd.over_id.with(|o| o.as_deref() == Some(dom_id.as_str())) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_: ()| {
            let id = id.clone();
            spawn_local(async move {
                match ctx.api().delete(&id).await {
                    Ok(()) => {
                        store_remove_task(&ctx.store, &id);
                        ctx.notify_success(TASK_DELETED_MESSAGE);
                    }
                    Err(e) => ctx.notify_error(&e),
                }
            });
        }
    };

    let save = {
        let id = id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let patch = TaskPatch::details(title.get_untracked().trim(), description.get_untracked().trim());
            if let Err(e) = patch.validate() {
                ctx.notify(ToastLevel::Error, e.to_string());
                return;
            }
            let id = id.clone();
            spawn_local(async move {
                match ctx.api().update(&id, &patch).await {
                    Ok(updated) => {
                        store_update_task(&ctx.store, updated);
                        set_editing.set(false);
                        ctx.notify_success(TASK_EDITED_MESSAGE);
                    }
                    Err(e) => ctx.notify_error(&e),
                }
            });
        }
    };

    let cancel_edit = {
        let original = (task.title.clone(), task.description.clone());
        move |_: web_sys::MouseEvent| {
            set_title.set(original.0.clone());
            set_description.set(original.1.clone());
            set_editing.set(false);
        }
    };

    let created = task.created_label();

    view! {
        <article
            class=card_class
            data-droppable=dom_id
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
        >
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="task-card-header">
                        <h3 class="task-title">{move || title.get()}</h3>
                        <div class="task-actions">
                            <button
                                class="edit-btn"
                                title="Edit task"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_editing.set(true);
                                }
                            >
                                "✎"
                            </button>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete.clone() />
                        </div>
                    </div>
                    <p class="task-description">{move || description.get()}</p>
                }
            >
                <form class="task-edit-form" on:submit=save.clone()>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <div class="task-edit-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=cancel_edit.clone()>"Cancel"</button>
                    </div>
                </form>
            </Show>
            <p class="task-created">"Created at: " {created}</p>
        </article>
    }
}
