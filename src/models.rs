//! Frontend Models
//!
//! Data structures matching the task API.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Board column a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Column order, left to right
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire value, also used as the column's droppable id
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "todo" => Some(TaskStatus::Todo),
            "in progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task data structure (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "user_id", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Wire shape: Mongo documents carry `_id`, some serializers add `id` too
#[derive(Deserialize)]
struct TaskRecord {
    id: Option<TaskId>,
    #[serde(rename = "_id")]
    mongo_id: Option<TaskId>,
    title: String,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
    #[serde(rename = "user_id", default)]
    owner: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = String;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.mongo_id)
            .ok_or_else(|| format!("task \"{}\" has no id", record.title))?;
        Ok(Task {
            id,
            title: record.title,
            description: record.description,
            status: record.status,
            created_at: record.created_at,
            owner: record.owner,
        })
    }
}

impl Task {
    /// Creation time as shown on cards (dd/mm/yyyy, 24h)
    pub fn created_label(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%d/%m/%Y, %H:%M")
            .to_string()
    }
}

/// Longest title the add/edit forms accept
pub const TITLE_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please don't leave the title blank")]
    BlankTitle,
    #[error("Title should be of max 20 character")]
    TitleTooLong,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        Err(ValidationError::BlankTitle)
    } else if title.chars().count() > TITLE_MAX_CHARS {
        Err(ValidationError::TitleTooLong)
    } else {
        Ok(())
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Todo,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

/// Partial update; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn details(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            status: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) fn make_task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId::new(id),
        title: format!("Task {}", id),
        description: String::new(),
        status,
        created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        owner: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_match_wire() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_token(status.as_str()), Some(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert_eq!(TaskStatus::from_token("in_progress"), None);
    }

    #[test]
    fn test_task_from_api_payload() {
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "user_id": "65a1f0c2e4b0a1b2c3d4e000",
            "title": "Write docs",
            "status": "in progress",
            "createdAt": "2024-01-13T08:30:00.000Z",
            "updatedAt": "2024-01-13T08:30:00.000Z",
            "__v": 0
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.description, "");
        assert_eq!(task.owner.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e000"));
    }

    #[test]
    fn test_task_accepts_plain_id() {
        let json = r#"{"id":"t1","title":"x","description":"d","status":"done","createdAt":"2024-01-13T08:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, TaskId::from("t1"));
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn test_task_with_both_ids_prefers_id() {
        let json = r#"{"_id":"m1","id":"m1","title":"x","status":"todo","createdAt":"2024-01-13T08:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "m1");
    }

    #[test]
    fn test_task_without_id_is_rejected() {
        let json = r#"{"title":"x","status":"todo","createdAt":"2024-01-13T08:30:00Z"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_status_patch_serializes_only_status() {
        let json = serde_json::to_value(TaskPatch::status(TaskStatus::Done)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "done" }));
    }

    #[test]
    fn test_new_task_validation() {
        assert_eq!(NewTask::new("  ", "").validate(), Err(ValidationError::BlankTitle));
        assert_eq!(
            NewTask::new("x".repeat(21), "").validate(),
            Err(ValidationError::TitleTooLong)
        );
        assert!(NewTask::new("Ship it", "").validate().is_ok());
        assert!(TaskPatch::status(TaskStatus::Done).validate().is_ok());
        assert_eq!(TaskPatch::details("", "d").validate(), Err(ValidationError::BlankTitle));
    }
}
