// src/api/sprint.rs
//! Sprint creation under /api/projects/{id}/sprints

use crate::client::ApiClient;
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seeded sprints always span two weeks.
const SPRINT_LENGTH_DAYS: i64 = 14;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSprintRequest {
    name: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    issue_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SprintResponse {
    pub id: i64,
}

fn build_request(now: DateTime<Utc>, sprint_number: u32) -> CreateSprintRequest {
    CreateSprintRequest {
        name: format!("Sprint-{}", sprint_number),
        start_date: now,
        end_date: now + Duration::days(SPRINT_LENGTH_DAYS),
        issue_ids: Vec::new(),
    }
}

pub async fn create_sprint(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
) -> Result<SprintResponse> {
    let number = rand::thread_rng().gen_range(1..=100);
    let body = build_request(Utc::now(), number);
    let path = format!("/api/projects/{}/sprints", project_id);
    client.post(&path, &body, Some(token)).await
}
