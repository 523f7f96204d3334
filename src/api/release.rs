// src/api/release.rs
//! Release creation under /api/projects/{id}/releases

use crate::client::ApiClient;
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateReleaseRequest<'a> {
    version: Version,
    release_notes: &'a str,
    issue_ids: &'a [i64],
}

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: i64,
}

pub async fn create_release(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
    issue_ids: &[i64],
) -> Result<ReleaseResponse> {
    let body = CreateReleaseRequest {
        version: Version {
            major: 1,
            minor: 0,
            patch: rand::thread_rng().gen_range(0..=10),
        },
        release_notes: "Auto-generated release notes",
        issue_ids,
    };
    let path = format!("/api/projects/{}/releases", project_id);
    client.post(&path, &body, Some(token)).await
}
