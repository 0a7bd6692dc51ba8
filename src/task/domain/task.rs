//! Task records as exchanged with the remote service.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task record.
///
/// Only the identity, title, and owning column are interpreted by the
/// store. Every other field the server sends (description, labels,
/// timestamps, …) is kept verbatim in [`Task::extra`] so that records
/// round-trip without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    column: ColumnId,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Task {
    /// Creates a task record with no additional fields.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            id,
            title: title.into(),
            column,
            extra: Map::new(),
        }
    }

    /// Attaches an additional opaque field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the column that owns the task.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Returns the fields not interpreted by the store.
    #[must_use]
    pub const fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Moves the record to another column.
    pub const fn set_column(&mut self, column: ColumnId) {
        self.column = column;
    }
}

/// Payload for creating a task. The server assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    /// Title of the new task.
    pub title: String,
    /// Column the task is created in.
    pub column: ColumnId,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Label identifiers attached at creation time.
    #[serde(default)]
    pub labels: Vec<u64>,
    /// Assignee identifiers attached at creation time.
    #[serde(default)]
    pub assignees: Vec<u64>,
    /// Any further fields forwarded to the server untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewTask {
    /// Creates a payload with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            title: title.into(),
            column,
            description: String::new(),
            labels: Vec::new(),
            assignees: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = u64>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets the assignees.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = u64>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }
}
