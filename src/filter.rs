//! Task Filter View
//!
//! Pure derivation of the visible task subset from the cached collection
//! and the two selectors. Recomputed wholesale on any input change.

use crate::models::{Task, TaskStatus};

/// Project selector: everything, or a single project id
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Project(String),
}

impl ProjectFilter {
    /// Value bound to the `<select>` ("all" or a project id)
    pub fn value(&self) -> String {
        match self {
            ProjectFilter::All => "all".to_string(),
            ProjectFilter::Project(id) => id.clone(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            ProjectFilter::All
        } else {
            ProjectFilter::Project(value.to_string())
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Project(id) => task.project_id == *id,
        }
    }
}

/// Status selector: everything, or a single task status
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(TaskStatus),
}

impl StatusFilter {
    /// Value bound to the `<select>` ("all" or a status wire value)
    pub fn value(&self) -> String {
        match self {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Status(status) => status.as_str().to_string(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            StatusFilter::All
        } else {
            StatusFilter::Status(TaskStatus::from_value(value))
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => task.status == *status,
        }
    }
}

/// Visible subset of the task cache, in cache order. The two predicates
/// compose by logical AND.
pub fn visible_tasks(
    tasks: &[Task],
    project: &ProjectFilter,
    status: &StatusFilter,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| project.matches(task) && status.matches(task))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, project_id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            project_id: project_id.to_string(),
            title: format!("Task {id}"),
            description: String::new(),
            status,
            due_date: "2026-08-10T00:00:00.000Z".to_string(),
            created_at: "2026-08-01T00:00:00.000Z".to_string(),
            updated_at: "2026-08-01T00:00:00.000Z".to_string(),
        }
    }

    fn fixture() -> Vec<Task> {
        vec![
            make_task("1", "p1", TaskStatus::Todo),
            make_task("2", "p2", TaskStatus::Done),
        ]
    }

    #[test]
    fn all_all_is_identity_in_original_order() {
        let tasks = fixture();
        let visible = visible_tasks(&tasks, &ProjectFilter::All, &StatusFilter::All);
        assert_eq!(visible, tasks);
    }

    #[test]
    fn predicates_compose_by_and() {
        let tasks = fixture();

        let by_project = visible_tasks(
            &tasks,
            &ProjectFilter::Project("p1".into()),
            &StatusFilter::All,
        );
        assert_eq!(by_project.len(), 1);
        assert_eq!(by_project[0].id, "1");

        let by_status = visible_tasks(
            &tasks,
            &ProjectFilter::All,
            &StatusFilter::Status(TaskStatus::Done),
        );
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, "2");

        let both = visible_tasks(
            &tasks,
            &ProjectFilter::Project("p2".into()),
            &StatusFilter::Status(TaskStatus::Todo),
        );
        assert!(both.is_empty());
    }

    #[test]
    fn derivation_is_idempotent() {
        let tasks = fixture();
        let project = ProjectFilter::Project("p1".into());
        let status = StatusFilter::All;

        let once = visible_tasks(&tasks, &project, &status);
        let twice = visible_tasks(&once, &project, &status);
        assert_eq!(once, twice);
    }

    #[test]
    fn dangling_project_reference_is_excluded_from_scoped_views() {
        // Task whose project no longer exists: no concrete filter matches
        // it, only the unscoped view shows it.
        let tasks = vec![make_task("9", "gone", TaskStatus::Todo)];
        let scoped = visible_tasks(
            &tasks,
            &ProjectFilter::Project("p1".into()),
            &StatusFilter::All,
        );
        assert!(scoped.is_empty());

        let unscoped = visible_tasks(&tasks, &ProjectFilter::All, &StatusFilter::All);
        assert_eq!(unscoped.len(), 1);
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(ProjectFilter::from_value("all"), ProjectFilter::All);
        assert_eq!(
            ProjectFilter::from_value("p7"),
            ProjectFilter::Project("p7".into())
        );
        assert_eq!(
            StatusFilter::from_value("in-progress"),
            StatusFilter::Status(TaskStatus::InProgress)
        );
        for filter in [StatusFilter::All, StatusFilter::Status(TaskStatus::Done)] {
            assert_eq!(StatusFilter::from_value(&filter.value()), filter);
        }
    }
}
