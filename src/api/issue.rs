// src/api/issue.rs
//! Issue creation under /api/projects/{id}/issues

use crate::client::ApiClient;
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Todo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateIssueRequest<'a> {
    title: &'a str,
    description: String,
    priority: Priority,
    story_points: u32,
    status: IssueStatus,
    assignee_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct IssueResponse {
    pub id: i64,
}

fn random_priority(rng: &mut impl Rng) -> Priority {
    match rng.gen_range(0..3) {
        0 => Priority::Low,
        1 => Priority::Medium,
        _ => Priority::High,
    }
}

pub async fn create_issue(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
    title: &str,
) -> Result<IssueResponse> {
    let mut rng = rand::thread_rng();
    let body = CreateIssueRequest {
        title,
        description: format!("Description for {}", title),
        priority: random_priority(&mut rng),
        story_points: rng.gen_range(1..=5),
        status: IssueStatus::Todo,
        assignee_id: None,
    };
    let path = format!("/api/projects/{}/issues", project_id);
    client.post(&path, &body, Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_request_shape() {
        let body = CreateIssueRequest {
            title: "Issue 1 for Alpha Project",
            description: "Description for Issue 1 for Alpha Project".to_string(),
            priority: Priority::High,
            story_points: 3,
            status: IssueStatus::Todo,
            assignee_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Issue 1 for Alpha Project");
        assert_eq!(json["priority"], "HIGH");
        assert_eq!(json["storyPoints"], 3);
        assert_eq!(json["status"], "TODO");
        assert!(json["assigneeId"].is_null());
    }

    #[test]
    fn test_priority_spellings() {
        assert_eq!(serde_json::to_value(Priority::Low).unwrap(), "LOW");
        assert_eq!(serde_json::to_value(Priority::Medium).unwrap(), "MEDIUM");
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), "HIGH");
    }

    #[test]
    fn test_random_priority_covers_all_variants() {
        let mut rng = rand::thread_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(format!("{:?}", random_priority(&mut rng)));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_issue_response_tolerates_extra_fields() {
        let json = r#"{"id":42,"title":"x","status":"TODO","storyPoints":2}"#;
        let res: IssueResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.id, 42);
    }
}
