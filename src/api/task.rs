// src/api/task.rs
//! Task creation under /api/projects/{id}/issues/{id}/tasks

use crate::client::ApiClient;
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskRequest<'a> {
    title: &'a str,
    description: String,
    definition_of_done: &'a str,
    status: TaskStatus,
    assignee_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TaskResponse {
    pub id: i64,
}

fn random_status(rng: &mut impl Rng) -> TaskStatus {
    if rng.gen_bool(0.5) {
        TaskStatus::Todo
    } else {
        TaskStatus::InProgress
    }
}

pub async fn create_task(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
    issue_id: i64,
    title: &str,
) -> Result<TaskResponse> {
    let mut rng = rand::thread_rng();
    let body = CreateTaskRequest {
        title,
        description: format!("Task for issue {}", issue_id),
        definition_of_done: "Done when passes review",
        status: random_status(&mut rng),
        assignee_id: None,
    };
    let path = format!("/api/projects/{}/issues/{}/tasks", project_id, issue_id);
    client.post(&path, &body, Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_request_shape() {
        let body = CreateTaskRequest {
            title: "Task 1 for issue 42",
            description: "Task for issue 42".to_string(),
            definition_of_done: "Done when passes review",
            status: TaskStatus::InProgress,
            assignee_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Task 1 for issue 42");
        assert_eq!(json["definitionOfDone"], "Done when passes review");
        assert_eq!(json["status"], "IN_PROGRESS");
        assert!(json["assigneeId"].is_null());
    }

    #[test]
    fn test_status_spellings() {
        assert_eq!(serde_json::to_value(TaskStatus::Todo).unwrap(), "TODO");
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            "IN_PROGRESS"
        );
    }

    #[test]
    fn test_random_status_covers_both_variants() {
        let mut rng = rand::thread_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(format!("{:?}", random_status(&mut rng)));
        }
        assert_eq!(seen.len(), 2);
    }
}
