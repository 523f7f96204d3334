// src/api/auth.rs
//! Registration and login against /api/auth

use crate::client::ApiClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// What both auth endpoints return: a JWT plus the user's identity.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    #[allow(dead_code)]
    pub name: String,
}

pub async fn register_user(
    client: &ApiClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AuthResponse> {
    let body = RegisterRequest { email, password, name };
    client.post("/api/auth/register", &body, None).await
}

pub async fn login_user(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    let body = LoginRequest { email, password };
    client.post("/api/auth/login", &body, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_shape() {
        let body = RegisterRequest {
            email: "alice@example.com",
            password: "password123",
            name: "Alice",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["password"], "password123");
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_auth_response_tolerates_extra_fields() {
        let json = r#"{"token":"jwt-abc","id":7,"name":"Alice","email":"alice@example.com","nom":"Alice"}"#;
        let res: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.token, "jwt-abc");
        assert_eq!(res.id, 7);
        assert_eq!(res.name, "Alice");
    }
}
