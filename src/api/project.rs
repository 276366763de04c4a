//! Project Calls

use serde::{Deserialize, Serialize};

use super::{bearer, decode, endpoint};
use crate::error::ApiError;
use crate::models::{Project, ProjectStatus};
use crate::session::Session;

/// Mutable project fields. Server-owned fields (`taskCount`, `createdAt`)
/// are never part of a mutation payload.
#[derive(Serialize)]
pub struct ProjectPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: ProjectStatus,
}

#[derive(Deserialize)]
struct ProjectList {
    projects: Vec<Project>,
}

pub async fn list_projects(session: &Session) -> Result<Vec<Project>, ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .get(endpoint("/api/projects/projects"))
        .bearer_auth(token)
        .send()
        .await?;
    let list: ProjectList = decode(response).await?;
    Ok(list.projects)
}

pub async fn create_project(
    session: &Session,
    payload: &ProjectPayload<'_>,
) -> Result<Project, ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .post(endpoint("/api/projects/projects"))
        .bearer_auth(token)
        .json(payload)
        .send()
        .await?;
    decode(response).await
}

pub async fn update_project(
    session: &Session,
    id: &str,
    payload: &ProjectPayload<'_>,
) -> Result<Project, ApiError> {
    let token = bearer(session)?;
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/api/projects/project/{id}")))
        .bearer_auth(token)
        .json(payload)
        .send()
        .await?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_only_mutable_fields() {
        let payload = ProjectPayload {
            title: "Roadmap",
            description: "Q4 planning",
            status: ProjectStatus::Active,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        for key in ["title", "description", "status"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(value["status"], "active");
    }
}
