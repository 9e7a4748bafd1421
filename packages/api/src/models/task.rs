//! Task records and the bodies used to change them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates::option_date;
use super::project::ProjectRef;
use super::user::UserRef;
use crate::query::{Params, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Completed,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub const SELECTABLE: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Review => "In review",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default, deserialize_with = "option_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub hours_logged: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub author: Option<UserRef>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    #[serde(alias = "_id")]
    pub id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub description: String,
}

impl TimeLog {
    pub fn minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Full task payload for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    #[serde(default)]
    pub responses: Vec<TaskResponse>,
    #[serde(default)]
    pub time_logs: Vec<TimeLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            project_id: task.project.as_ref().map(|p| p.id.clone()),
            assignee_id: task.assignee.as_ref().map(|u| u.id.clone()),
            priority: task.priority,
            due_date: task.due_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusDraft {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskResponseDraft {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub project_id: Option<String>,
}

impl QueryParams for TaskFilter {
    fn query_params(&self) -> Vec<(String, String)> {
        Params::new()
            .wire("status", self.status.as_ref())
            .wire("priority", self.priority.as_ref())
            .opt("project", self.project_id.as_deref())
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_detail_decodes() {
        let detail: TaskDetail = serde_json::from_str(
            r#"{
                "_id": "t1",
                "title": "Fix login",
                "status": "review",
                "priority": "urgent",
                "project": {"_id": "p1", "name": "Portal"},
                "responses": [{"_id": "r1", "message": "Done on staging"}],
                "timeLogs": [{"_id": "l1", "startTime": "2024-02-01T09:00:00", "endTime": "2024-02-01T11:15:00"}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.task.status, TaskStatus::Review);
        assert_eq!(detail.task.priority, TaskPriority::Urgent);
        assert_eq!(detail.responses[0].message, "Done on staging");
        assert_eq!(detail.time_logs[0].minutes(), 135);
    }

    #[test]
    fn test_filter_params_in_order() {
        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            priority: Some(TaskPriority::High),
            project_id: Some("p9".into()),
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("status".to_string(), "in-progress".to_string()),
                ("priority".to_string(), "high".to_string()),
                ("project".to_string(), "p9".to_string()),
            ]
        );
    }
}
