//! CRUD Modal Controller
//!
//! State machine for the create/edit modals plus the form models they
//! bind. Create and edit are distinct variants so the two initialization
//! paths stay exhaustive.

use crate::models::{Project, ProjectStatus, Task, TaskStatus};

/// Modal lifecycle state
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<E> {
    Closed,
    Create,
    Edit(E),
}

impl<E> ModalState<E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, ModalState::Edit(_))
    }
}

/// Calendar-date part of a server timestamp, for `<input type="date">`
/// ("2026-08-06T09:30:00.000Z" -> "2026-08-06").
pub fn date_only(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Form values for the project modal
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
}

impl ProjectForm {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: ProjectStatus::Active,
        }
    }

    pub fn for_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            status: project.status,
        }
    }

    /// Required fields must be non-empty before a submit is issued
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Form values for the task modal
#[derive(Clone, Debug, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: String,
    pub project_id: String,
}

impl TaskForm {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            due_date: String::new(),
            project_id: String::new(),
        }
    }

    pub fn for_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            due_date: date_only(&task.due_date).to_string(),
            project_id: task.project_id.clone(),
        }
    }

    /// Required fields must be non-empty before a submit is issued
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.project_id.is_empty()
            && !self.due_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task() -> Task {
        Task {
            id: "t1".to_string(),
            project_id: "p1".to_string(),
            title: "Ship the release".to_string(),
            description: "Cut and tag".to_string(),
            status: TaskStatus::InProgress,
            due_date: "2026-08-20T14:05:00.000Z".to_string(),
            created_at: "2026-08-01T00:00:00.000Z".to_string(),
            updated_at: "2026-08-02T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn create_and_edit_are_distinct_states() {
        let create = ModalState::<Task>::Create;
        assert!(create.is_open());
        assert!(!create.is_edit());

        let edit = ModalState::Edit(make_task());
        assert!(edit.is_open());
        assert!(edit.is_edit());

        assert!(!ModalState::<Task>::Closed.is_open());
    }

    #[test]
    fn blank_forms_use_create_defaults() {
        assert_eq!(ProjectForm::blank().status, ProjectStatus::Active);
        let task = TaskForm::blank();
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.project_id.is_empty());
    }

    #[test]
    fn edit_form_prefills_from_the_entity() {
        let task = make_task();
        let form = TaskForm::for_task(&task);
        assert_eq!(form.title, task.title);
        assert_eq!(form.status, TaskStatus::InProgress);
        assert_eq!(form.project_id, "p1");
        // Time-of-day component is discarded for the date input
        assert_eq!(form.due_date, "2026-08-20");
    }

    #[test]
    fn date_only_discards_the_time_component() {
        assert_eq!(date_only("2026-08-20T14:05:00.000Z"), "2026-08-20");
        assert_eq!(date_only("2026-08-20"), "2026-08-20");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn incomplete_forms_do_not_pass_validation() {
        let mut form = TaskForm::for_task(&make_task());
        assert!(form.is_complete());

        form.project_id.clear();
        assert!(!form.is_complete());

        let mut project = ProjectForm::blank();
        assert!(!project.is_complete());
        project.title = "Roadmap".to_string();
        project.description = "Q4".to_string();
        assert!(project.is_complete());
    }
}
