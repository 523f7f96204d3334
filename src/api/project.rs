// src/api/project.rs
//! Project creation and collaborator management under /api/projects

use crate::client::ApiClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct UserRef<'a> {
    id: i64,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateProjectRequest<'a> {
    name: &'a str,
    description: &'a str,
    user: UserRef<'a>,
    // The backend deserializes this French field name; do not rename.
    collaborateurs: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
struct AddCollaboratorsRequest<'a> {
    collaborators: &'a [String],
}

pub async fn create_project(
    client: &ApiClient,
    token: &str,
    name: &str,
    description: &str,
    owner_id: i64,
    owner_email: &str,
) -> Result<ProjectResponse> {
    let body = CreateProjectRequest {
        name,
        description,
        user: UserRef {
            id: owner_id,
            email: owner_email,
        },
        collaborateurs: Vec::new(),
    };
    client.post("/api/projects", &body, Some(token)).await
}

/// Adds collaborators by email. The backend returns the updated list of
/// collaborators, which the seeder has no use for.
pub async fn add_collaborators(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
    emails: &[String],
) -> Result<()> {
    let path = format!("/api/projects/{}/collaborators", project_id);
    let body = AddCollaboratorsRequest { collaborators: emails };
    client.post_and_ignore(&path, &body, Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_request_shape() {
        let body = CreateProjectRequest {
            name: "Alpha Project",
            description: "Test project Alpha",
            user: UserRef {
                id: 1,
                email: "alice@example.com",
            },
            collaborateurs: Vec::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "Alpha Project");
        assert_eq!(json["user"]["id"], 1);
        assert_eq!(json["user"]["email"], "alice@example.com");
        // The backend expects the French spelling here.
        assert!(json["collaborateurs"].as_array().unwrap().is_empty());
        assert!(json.get("collaborators").is_none());
    }

    #[test]
    fn test_add_collaborators_request_shape() {
        let emails = vec!["bob@example.com".to_string(), "carol@example.com".to_string()];
        let body = AddCollaboratorsRequest { collaborators: &emails };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["collaborators"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_project_response_parses_uuid() {
        let json = r#"{
            "id": "2a9f9df1-6a64-4e43-9c3c-6f2e9e2f2f10",
            "name": "Alpha Project",
            "description": "Test project Alpha",
            "createdAt": "2024-01-01T00:00:00"
        }"#;
        let res: ProjectResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.name, "Alpha Project");
        assert_eq!(
            res.id.to_string(),
            "2a9f9df1-6a64-4e43-9c3c-6f2e9e2f2f10"
        );
    }
}
