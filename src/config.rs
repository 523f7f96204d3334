// src/config.rs
//! Seed configuration and the seed plan data structures

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Connection settings for the backend under seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("Backend base URL cannot be empty");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("Backend base URL must start with http:// or https://");
        }
        if self.timeout_ms == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }
        Ok(())
    }
}

/// A user to register and log in before seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// A project to create, owned by one planned user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProject {
    pub name: String,
    pub description: String,
    /// Email of the planned user who creates the project.
    pub owner: String,
    /// Emails of planned users to add as collaborators.
    pub collaborators: Vec<String>,
}

/// The full dataset to create on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPlan {
    pub users: Vec<SeedUser>,
    pub projects: Vec<SeedProject>,
    pub issues_per_project: u32,
    pub tasks_per_issue: u32,
    pub tests_per_issue: u32,
}

/// Entity counts a plan produces when it runs to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTotals {
    pub users: u32,
    pub projects: u32,
    pub issues: u32,
    pub tasks: u32,
    pub tests: u32,
    pub docs: u32,
    pub sprints: u32,
    pub releases: u32,
}

fn seed_user(email: &str, password: &str, name: &str) -> SeedUser {
    SeedUser {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    }
}

impl Default for SeedPlan {
    /// The canonical demo dataset: three users, two projects,
    /// three issues per project with two tasks and one test each.
    fn default() -> Self {
        Self {
            users: vec![
                seed_user("alice@example.com", "password123", "Alice"),
                seed_user("bob@example.com", "password123", "Bob"),
                seed_user("carol@example.com", "password123", "Carol"),
            ],
            projects: vec![
                SeedProject {
                    name: "Alpha Project".to_string(),
                    description: "Test project Alpha".to_string(),
                    owner: "alice@example.com".to_string(),
                    collaborators: vec![
                        "bob@example.com".to_string(),
                        "carol@example.com".to_string(),
                    ],
                },
                SeedProject {
                    name: "Beta Project".to_string(),
                    description: "Test project Beta".to_string(),
                    owner: "bob@example.com".to_string(),
                    collaborators: vec!["alice@example.com".to_string()],
                },
            ],
            issues_per_project: 3,
            tasks_per_issue: 2,
            tests_per_issue: 1,
        }
    }
}

impl SeedPlan {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed plan from {}", path.display()))?;

        let plan: SeedPlan = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed plan {}", path.display()))?;

        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.users.is_empty() {
            anyhow::bail!("Seed plan must include at least one user");
        }
        if self.projects.is_empty() {
            anyhow::bail!("Seed plan must include at least one project");
        }
        // Docs are linked to each project's first issue, so every
        // project needs at least one.
        if self.issues_per_project == 0 {
            anyhow::bail!("Seed plan must create at least one issue per project");
        }

        for project in &self.projects {
            if !self.has_user(&project.owner) {
                anyhow::bail!(
                    "Project '{}' is owned by {}, who is not a planned user",
                    project.name,
                    project.owner
                );
            }
            for email in &project.collaborators {
                if !self.has_user(email) {
                    anyhow::bail!(
                        "Project '{}' lists collaborator {}, who is not a planned user",
                        project.name,
                        email
                    );
                }
                if email == &project.owner {
                    anyhow::bail!(
                        "Project '{}' lists its owner {} as a collaborator",
                        project.name,
                        email
                    );
                }
            }
        }

        Ok(())
    }

    fn has_user(&self, email: &str) -> bool {
        self.users.iter().any(|user| user.email == email)
    }

    pub fn expected_totals(&self) -> SeedTotals {
        let projects = self.projects.len() as u32;
        let issues = projects * self.issues_per_project;
        SeedTotals {
            users: self.users.len() as u32,
            projects,
            issues,
            tasks: issues * self.tasks_per_issue,
            tests: issues * self.tests_per_issue,
            docs: projects,
            sprints: projects,
            releases: projects,
        }
    }
}
