// src/client.rs
//! Thin HTTP wrapper around the backend REST API

use crate::config::SeedConfig;
use anyhow::{Context, Result};
use log::{debug, error, info};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// JSON-over-HTTP client for the backend, with optional bearer auth.
/// Any non-2xx response turns into an error carrying the status and
/// whatever body the server sent back.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(cfg: &SeedConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;
        debug!("HTTP client built with timeout: {}ms", cfg.timeout_ms);

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn ensure_success(method: &str, url: &str, res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let text = res.text().await.unwrap_or_else(|_| "N/A".to_string());
        error!("{} {} responded with HTTP {} and body: {}", method, url, status, text);
        anyhow::bail!("{} {} failed with HTTP {}: {}", method, url, status, text)
    }

    /// POST a JSON payload and deserialize the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut req = self.http.post(&url).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let res = Self::ensure_success("POST", &url, res).await?;
        res.json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from POST {}", url))
    }

    /// POST a JSON payload when the response body is of no further use.
    pub async fn post_and_ignore<B>(&self, path: &str, body: &B, token: Option<&str>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut req = self.http.post(&url).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        Self::ensure_success("POST", &url, res).await?;
        Ok(())
    }

    /// POST with no payload at all (the documentation-issue link
    /// endpoint takes everything through the path).
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<()> {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut req = self.http.post(&url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        Self::ensure_success("POST", &url, res).await?;
        Ok(())
    }

    #[allow(dead_code)]
    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("GET {}", url);

        let mut req = self.http.get(&url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let res = Self::ensure_success("GET", &url, res).await?;
        res.json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from GET {}", url))
    }

    /// Plain-text GET, used for the hello endpoint.
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!("GET {}", url);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let res = Self::ensure_success("GET", &url, res).await?;
        res.text()
            .await
            .with_context(|| format!("Failed to read response body from GET {}", url))
    }

    #[allow(dead_code)]
    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PUT {}", url);

        let mut req = self.http.put(&url).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;

        let res = Self::ensure_success("PUT", &url, res).await?;
        res.json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from PUT {}", url))
    }

    #[allow(dead_code)]
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let mut req = self.http.delete(&url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", url))?;

        // The backend answers deletes with 200 or 204 depending on the
        // resource.
        Self::ensure_success("DELETE", &url, res).await?;
        Ok(())
    }
}

/// Ping the backend and report reachability.
/// Returns Ok(()) on success, Err on any network/HTTP error.
pub async fn check_status(cfg: &SeedConfig) -> Result<()> {
    info!("Checking backend status at {}", cfg.base_url);
    let client = ApiClient::new(cfg)?;

    let greeting = client.get_text("/api/hello").await?;
    info!("Backend responded: {}", greeting);
    println!("   Status: ✅ Connected to {}", cfg.base_url);
    Ok(())
}
