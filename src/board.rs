//! Board Partition View
//!
//! Splits the flat task collection into one ordered list per column.

use crate::models::{Task, TaskStatus};

/// Tasks grouped by column, each in collection order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardPartition {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl BoardPartition {
    pub fn bucket(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }
}

pub fn partition(tasks: &[Task]) -> BoardPartition {
    let mut board = BoardPartition::default();
    for task in tasks {
        let bucket = match task.status {
            TaskStatus::Todo => &mut board.todo,
            TaskStatus::InProgress => &mut board.in_progress,
            TaskStatus::Done => &mut board.done,
        };
        bucket.push(task.clone());
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_task;

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_partition_keeps_collection_order() {
        let tasks = vec![
            make_task("a", TaskStatus::Done),
            make_task("b", TaskStatus::Todo),
            make_task("c", TaskStatus::InProgress),
            make_task("d", TaskStatus::Todo),
            make_task("e", TaskStatus::Done),
        ];
        let board = partition(&tasks);
        assert_eq!(ids(board.bucket(TaskStatus::Todo)), vec!["b", "d"]);
        assert_eq!(ids(board.bucket(TaskStatus::InProgress)), vec!["c"]);
        assert_eq!(ids(board.bucket(TaskStatus::Done)), vec!["a", "e"]);
    }

    #[test]
    fn test_empty_collection() {
        let board = partition(&[]);
        assert_eq!(board, BoardPartition::default());
        for status in TaskStatus::ALL {
            assert!(board.bucket(status).is_empty());
        }
    }
}
