//! Task Calls

use serde::{Deserialize, Serialize};

use super::{bearer, decode, endpoint, error_from};
use crate::error::ApiError;
use crate::models::{Task, TaskStatus};
use crate::session::Session;

#[derive(Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: TaskStatus,
    #[serde(rename = "dueDate")]
    pub due_date: &'a str,
    #[serde(rename = "projectId")]
    pub project_id: &'a str,
}

#[derive(Deserialize)]
struct TaskList {
    tasks: Vec<Task>,
}

pub async fn list_tasks(session: &Session) -> Result<Vec<Task>, ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .get(endpoint("/api/tasks/tasks"))
        .bearer_auth(token)
        .send()
        .await?;
    let list: TaskList = decode(response).await?;
    Ok(list.tasks)
}

pub async fn create_task(
    session: &Session,
    payload: &TaskPayload<'_>,
) -> Result<Task, ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .post(endpoint("/api/tasks/tasks"))
        .bearer_auth(token)
        .json(payload)
        .send()
        .await?;
    decode(response).await
}

pub async fn update_task(
    session: &Session,
    id: &str,
    payload: &TaskPayload<'_>,
) -> Result<Task, ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/api/tasks/task/{id}")))
        .bearer_auth(token)
        .json(payload)
        .send()
        .await?;
    decode(response).await
}

pub async fn delete_task(session: &Session, id: &str) -> Result<(), ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .delete(endpoint(&format!("/api/tasks/task/{id}")))
        .bearer_auth(token)
        .send()
        .await?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_the_server_field_names() {
        let payload = TaskPayload {
            title: "Ship it",
            description: "Tag and release",
            status: TaskStatus::InProgress,
            due_date: "2026-08-20",
            project_id: "p1",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["dueDate"], "2026-08-20");
        assert_eq!(value["projectId"], "p1");
        assert_eq!(value["status"], "in-progress");
    }
}
