use crate::models::{TaskId, TaskStatus};

/// What the lifted card is hovering
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// A column, by status
    Bucket(TaskStatus),
    /// Another card
    Task(TaskId),
}

impl DragTarget {
    /// Classify a droppable id: status tokens are columns, anything else a card
    pub fn from_droppable_id(id: &str) -> Self {
        match TaskStatus::from_token(id) {
            Some(status) => DragTarget::Bucket(status),
            None => DragTarget::Task(TaskId::from(id)),
        }
    }
}
