//! Drag Overlay Component
//!
//! Floating copy of the lifted card that follows the pointer.

use board_dnd::{DndSignals, Rect};
use leptos::prelude::*;

use crate::models::Task;

fn overlay_style(rect: Option<Rect>) -> String {
    match rect {
        Some(r) => format!(
            "position: fixed; left: {}px; top: {}px; width: {}px; pointer-events: none; z-index: 1000;",
            r.left, r.top, r.width
        ),
        None => "display: none;".to_string(),
    }
}

#[component]
pub fn DragOverlay(lifted: Signal<Option<Task>>, dnd: DndSignals) -> impl IntoView {
    move || {
        lifted.get().map(|task| {
            view! {
                <div class="task-card drag-overlay" style=move || overlay_style(dnd.dragged_rect.get())>
                    <h3 class="task-title">{task.title}</h3>
                    <p class="task-description">{task.description}</p>
                </div>
            }
        })
    }
}
