// src/api/mod.rs
//! Typed bindings for the backend REST endpoints, one module per resource

pub mod auth;
pub mod docs;
pub mod issue;
pub mod project;
pub mod release;
pub mod sprint;
pub mod task;
pub mod test_case;
