//! Board Column Component
//!
//! One status column; the column itself is a drop target.

use board_dnd::DndSignals;
use leptos::prelude::*;

use crate::components::TaskCard;
use crate::models::{Task, TaskStatus};

#[component]
pub fn BoardColumn(status: TaskStatus, tasks: Signal<Vec<Task>>, dnd: DndSignals) -> impl IntoView {
    let is_drop_target = move || dnd.over_id.with(|o| o.as_deref() == Some(status.as_str()));
    let column_class = move || {
        if is_drop_target() {
            "board-column drop-target"
        } else {
            "board-column"
        }
    };

    view! {
        <section class=column_class data-droppable=status.as_str()>
            <header class="board-column-header">
                <h2>{status.label()}</h2>
                <span class="board-column-count">{move || tasks.with(|t| t.len())}</span>
            </header>
            <div class="board-column-body">
                <For
                    each=move || tasks.get()
                    // Re-render when any displayed field changes
                    key=|task| (task.id.clone(), task.title.clone(), task.description.clone(), task.status)
                    children=move |task| view! { <TaskCard task=task dnd=dnd /> }
                />
            </div>
        </section>
    }
}
