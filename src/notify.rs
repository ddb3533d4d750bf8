//! Notifications
//!
//! Transient toast messages shown in the corner of the board.

pub const TASK_ADDED_MESSAGE: &str = "Task added successfully!";
pub const TASK_EDITED_MESSAGE: &str = "Task edited successfully!";
pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u32,
}

/// Older toasts are dropped beyond this many
const MAX_VISIBLE: usize = 5;

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast; unknown ids are ignored (already dismissed)
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
