//! Configuration for the task board services.

use serde::{Deserialize, Serialize};

/// Notification texts emitted by the services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskBoardConfig {
    /// Shown after a task is created.
    pub task_created: String,
    /// Shown after a task is deleted.
    pub task_deleted: String,
    /// Shown after a new order is persisted.
    pub tasks_ordered: String,
}

impl Default for TaskBoardConfig {
    fn default() -> Self {
        Self {
            task_created: "Task created".to_owned(),
            task_deleted: "Task deleted".to_owned(),
            tasks_ordered: "Tasks ordered".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskBoardConfig;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: TaskBoardConfig =
            serde_json::from_str(r#"{"task_deleted": "Gone"}"#).expect("valid config");

        assert_eq!(config.task_deleted, "Gone");
        assert_eq!(config.task_created, "Task created");
        assert_eq!(config.tasks_ordered, "Tasks ordered");
    }
}
