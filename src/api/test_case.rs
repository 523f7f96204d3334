// src/api/test_case.rs
//! Test creation under /api/projects/{id}/issues/{id}/tests

use crate::client::ApiClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder program the seeded test exercises.
const PROGRAM_CODE: &str = "function add(a, b) {\n  return a + b\n}";

const TEST_CODE: &str =
    "test(\"add(2, 3) devrait retourner 5\", () => {\n  assertEquals(add(2, 3), 5)\n})";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTestRequest<'a> {
    program_code: &'a str,
    test_code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TestResponse {
    pub id: i64,
}

pub async fn create_test(
    client: &ApiClient,
    token: &str,
    project_id: Uuid,
    issue_id: i64,
) -> Result<TestResponse> {
    let body = CreateTestRequest {
        program_code: PROGRAM_CODE,
        test_code: TEST_CODE,
    };
    let path = format!("/api/projects/{}/issues/{}/tests", project_id, issue_id);
    client.post(&path, &body, Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = CreateTestRequest {
            program_code: PROGRAM_CODE,
            test_code: TEST_CODE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["programCode"]
            .as_str()
            .unwrap()
            .starts_with("function add(a, b)"));
        assert!(json["testCode"].as_str().unwrap().contains("assertEquals(add(2, 3), 5)"));
    }
}
