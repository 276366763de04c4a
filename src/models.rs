//! Wire Models
//!
//! Data structures matching the REST API entities.

use serde::{Deserialize, Serialize};

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl ProjectStatus {
    /// Wire value, also used as a CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Parse a `<select>` value, falling back to the create default
    pub fn from_value(value: &str) -> Self {
        match value {
            "completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Active,
        }
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Wire value ("todo", "in-progress", "done")
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a `<select>` value, falling back to the create default
    pub fn from_value(value: &str) -> Self {
        match value {
            "in-progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            _ => TaskStatus::Todo,
        }
    }
}

/// Project data structure (matches the server entity)
///
/// `task_count` and `created_at` are server-derived and never sent back on
/// a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(rename = "taskCount", default)]
    pub task_count: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Task data structure (matches the server entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Format a server timestamp for display ("Aug 6, 2026"). Values the
/// server sends that are not RFC 3339 are shown as-is.
pub fn format_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&TaskStatus::Todo).unwrap(), "\"todo\"");
        let parsed: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
    }

    #[test]
    fn select_values_round_trip() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(TaskStatus::from_value(status.as_str()), status);
        }
        for status in [ProjectStatus::Active, ProjectStatus::Completed] {
            assert_eq!(ProjectStatus::from_value(status.as_str()), status);
        }
    }

    #[test]
    fn format_date_handles_server_timestamps() {
        assert_eq!(format_date("2026-08-06T09:30:00.000Z"), "Aug 6, 2026");
        // Unparseable input is displayed untouched
        assert_eq!(format_date("someday"), "someday");
    }
}
