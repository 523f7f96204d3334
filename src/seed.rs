// src/seed.rs
//! The seed pipeline: register users, then build every project's
//! issues, tasks, tests, documentation, sprint and release in order.

use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;

use crate::api::{auth, docs, issue, project, release, sprint, task, test_case};
use crate::client::ApiClient;
use crate::config::{SeedConfig, SeedPlan};

/// A logged-in user: the bearer token plus the id the backend assigned.
struct Session {
    token: String,
    user_id: i64,
}

fn issue_title(index: u32, project_name: &str) -> String {
    format!("Issue {} for {}", index + 1, project_name)
}

fn task_title(index: u32, issue_id: i64) -> String {
    format!("Task {} for issue {}", index + 1, issue_id)
}

fn doc_title(project_name: &str) -> String {
    format!("{} Docs", project_name)
}

pub async fn run(cfg: &SeedConfig, plan: &SeedPlan) -> Result<()> {
    cfg.validate()?;
    plan.validate()?;

    let client = ApiClient::new(cfg)?;
    info!("Seeding backend at {}", cfg.base_url);

    println!("👤 Registering and logging in users...");
    let sessions = login_all(&client, plan).await?;

    println!("\n📁 Creating projects...");
    for planned in &plan.projects {
        let owner = sessions
            .get(&planned.owner)
            .with_context(|| format!("No session for project owner {}", planned.owner))?;

        let created = project::create_project(
            &client,
            &owner.token,
            &planned.name,
            &planned.description,
            owner.user_id,
            &planned.owner,
        )
        .await
        .with_context(|| format!("Failed to create project '{}'", planned.name))?;
        println!("   Created project {} ({})", created.name, created.id);

        if !planned.collaborators.is_empty() {
            project::add_collaborators(&client, &owner.token, created.id, &planned.collaborators)
                .await
                .with_context(|| {
                    format!("Failed to add collaborators to '{}'", created.name)
                })?;
            info!(
                "Added {} collaborator(s) to {}",
                planned.collaborators.len(),
                created.name
            );
        }

        seed_project_contents(&client, &owner.token, &created, plan).await?;
    }

    let totals = plan.expected_totals();
    println!("\n✔ Seed data generation completed!");
    println!(
        "   {} users, {} projects, {} issues, {} tasks, {} tests",
        totals.users, totals.projects, totals.issues, totals.tasks, totals.tests
    );
    println!(
        "   {} docs, {} sprints, {} releases",
        totals.docs, totals.sprints, totals.releases
    );

    Ok(())
}

/// Registers every planned user and logs them in. A registration
/// failure is only logged: the user may already exist from an earlier
/// run. A login failure aborts the whole run.
async fn login_all(client: &ApiClient, plan: &SeedPlan) -> Result<HashMap<String, Session>> {
    let mut sessions = HashMap::new();

    for user in &plan.users {
        if let Err(err) =
            auth::register_user(client, &user.email, &user.password, &user.name).await
        {
            warn!("Registration failed for {} (may already exist): {:#}", user.email, err);
        }

        let auth = auth::login_user(client, &user.email, &user.password)
            .await
            .with_context(|| format!("Failed to log in {}", user.email))?;
        println!("   Logged in: {}", user.email);

        sessions.insert(
            user.email.clone(),
            Session {
                token: auth.token,
                user_id: auth.id,
            },
        );
    }

    Ok(sessions)
}

/// Fills one freshly created project: issues with their tasks and
/// tests, a documentation page linked to the first issue, a sprint,
/// and a release covering every issue.
async fn seed_project_contents(
    client: &ApiClient,
    token: &str,
    created: &project::ProjectResponse,
    plan: &SeedPlan,
) -> Result<()> {
    let mut issue_ids = Vec::new();

    for i in 0..plan.issues_per_project {
        let title = issue_title(i, &created.name);
        let issue = issue::create_issue(client, token, created.id, &title)
            .await
            .with_context(|| format!("Failed to create '{}'", title))?;
        println!("   Created issue {} in {}", issue.id, created.name);

        for t in 0..plan.tasks_per_issue {
            let task = task::create_task(client, token, created.id, issue.id, &task_title(t, issue.id))
                .await
                .with_context(|| format!("Failed to create task under issue {}", issue.id))?;
            println!("      Created task {}", task.id);
        }

        for _ in 0..plan.tests_per_issue {
            let test = test_case::create_test(client, token, created.id, issue.id)
                .await
                .with_context(|| format!("Failed to create test under issue {}", issue.id))?;
            println!("      Created test {}", test.id);
        }

        issue_ids.push(issue.id);
    }

    let doc = docs::create_documentation(client, token, created.id, &doc_title(&created.name))
        .await
        .with_context(|| format!("Failed to create documentation for {}", created.name))?;
    println!("   Created documentation {}", doc.id);

    // Plan validation guarantees at least one issue per project.
    docs::link_doc_to_issue(client, doc.id, issue_ids[0])
        .await
        .context("Failed to link documentation to issue")?;
    println!("   Linked documentation to issue {}", issue_ids[0]);

    let sprint = sprint::create_sprint(client, token, created.id)
        .await
        .with_context(|| format!("Failed to create sprint for {}", created.name))?;
    println!("   Created sprint {}", sprint.id);

    let release = release::create_release(client, token, created.id, &issue_ids)
        .await
        .with_context(|| format!("Failed to create release for {}", created.name))?;
    println!("   Created release {}", release.id);

    Ok(())
}
