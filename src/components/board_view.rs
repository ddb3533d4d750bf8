//! Board View Component
//!
//! Three status columns with drag-and-drop between them.
//! Drag events run through the [`SyncEngine`]; status changes are
//! persisted in the background and reconciled when they fail.

use board_dnd::{bind_drag_listeners, create_dnd_signals, DragEvent, SensorConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::partition;
use crate::components::{BoardColumn, DragOverlay};
use crate::context::{use_board_context, BoardContext};
use crate::models::{TaskId, TaskStatus};
use crate::store::AppStateStoreFields;
use crate::sync::{persist_status, DragTarget, PersistStatus, Reconciliation, SyncEngine};

/// Board component with DnD support
#[component]
pub fn BoardView(sensors: SensorConfig) -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;

    let dnd = create_dnd_signals(sensors);
    let engine = StoredValue::new(SyncEngine::new());
    // Mirrors the engine's active task for the overlay
    let active_task = RwSignal::new(None::<TaskId>);

    bind_drag_listeners(dnd, move |event| match event {
        DragEvent::Start { active } => {
            let id = TaskId::from(active);
            let started = store
                .tasks()
                .with_untracked(|tasks| engine.try_update_value(|e| e.drag_start(tasks, &id)))
                .unwrap_or(false);
            active_task.set(started.then_some(id));
        }
        DragEvent::Over { active, over } => {
            let active = TaskId::from(active);
            let target = over.as_deref().map(DragTarget::from_droppable_id);
            // Most hover events plan nothing; only real changes touch the store
            let Some(plan) = store
                .tasks()
                .with_untracked(|tasks| engine.try_update_value(|e| e.plan_over(tasks, &active, target)))
                .flatten()
            else {
                return;
            };
            let effect = plan.apply(&mut store.tasks().write());
            if let Some(effect) = effect {
                persist_in_background(ctx, effect);
            }
        }
        DragEvent::End { .. } => {
            engine.update_value(|e| {
                e.drag_end();
            });
            active_task.set(None);
        }
        DragEvent::Cancel { .. } => {
            engine.update_value(|e| {
                e.drag_cancel();
            });
            active_task.set(None);
        }
    });

    let board = Memo::new(move |_| store.tasks().with(|tasks| partition(tasks)));
    let lifted = Signal::derive(move || {
        let id = active_task.get()?;
        store.tasks().with(|tasks| tasks.iter().find(|t| t.id == id).cloned())
    });

    view! {
        <div class="board">
            {TaskStatus::ALL
                .into_iter()
                .map(|status| {
                    let tasks = Signal::derive(move || board.with(|b| b.bucket(status).to_vec()));
                    view! { <BoardColumn status=status tasks=tasks dnd=dnd /> }
                })
                .collect_view()}
        </div>
        <DragOverlay lifted=lifted dnd=dnd />
    }
}

/// Fire the status write without blocking the gesture; fold failures back in
///
/// A rejected write is toasted before the refetch is awaited.
fn persist_in_background(ctx: BoardContext, effect: PersistStatus) {
    spawn_local(async move {
        let api = ctx.api();
        let outcome = persist_status(api.as_ref(), &effect, |error| ctx.notify_error(error)).await;
        if outcome == Reconciliation::Confirmed {
            return;
        }
        let refetch_error = outcome.apply(&mut ctx.store.tasks().write());
        if let Some(error) = refetch_error {
            ctx.notify_error(&error);
        }
    });
}
