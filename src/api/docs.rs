// src/api/docs.rs
//! Documentation pages and their links to issues

use crate::client::ApiClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct CreateDocRequest<'a> {
    title: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
pub struct DocResponse {
    pub id: i64,
}

pub async fn create_documentation(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
    title: &str,
) -> Result<DocResponse> {
    let body = CreateDocRequest {
        title,
        content: format!("{} content", title),
    };
    let path = format!("/api/projects/{}/docs", project_id);
    client.post(&path, &body, Some(token)).await
}

/// The link endpoint is unauthenticated on the backend and takes both
/// ids through the path, so there is no payload.
pub async fn link_doc_to_issue(client: &ApiClient, doc_id: i64, issue_id: i64) -> Result<()> {
    let path = format!(
        "/api/documentation-issues/documentation/{}/issue/{}",
        doc_id, issue_id
    );
    client.post_empty(&path, None).await
}
