//! New Task Form Component
//!
//! Title and description inputs; new tasks start in the TODO column.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board_context;
use crate::models::{NewTask, TITLE_MAX_CHARS};
use crate::notify::TASK_ADDED_MESSAGE;
use crate::store::store_add_task;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_board_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let new_task = NewTask::new(title.get_untracked().trim(), description.get_untracked().trim());
        if let Err(e) = new_task.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        spawn_local(async move {
            match ctx.api().create(&new_task).await {
                Ok(task) => {
                    store_add_task(&ctx.store, task);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.notify_success(TASK_ADDED_MESSAGE);
                }
                Err(e) => ctx.notify_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder=format!("Title (max {} characters)", TITLE_MAX_CHARS)
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || saving.get()>"Add Task"</button>
            </div>
            <textarea
                rows="2"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
