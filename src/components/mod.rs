//! UI Components
//!
//! Leptos components for the task board.

mod board_column;
mod board_view;
mod delete_confirm_button;
mod drag_overlay;
mod new_task_form;
mod task_card;
mod toast_host;

pub use board_column::BoardColumn;
pub use board_view::BoardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_overlay::DragOverlay;
pub use new_task_form::NewTaskForm;
pub use task_card::TaskCard;
pub use toast_host::ToastHost;
