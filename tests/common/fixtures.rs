//! Predefined workspace scenarios

#![allow(dead_code)]

use super::workspace::*;
use lazytf::core::error::Result;
use std::path::PathBuf;

/// Scenario: project `network` with dev/prod var files and one backend file
/// per environment under `variables/backend/`.
pub fn create_network_project(ws: &TestWorkspace) -> Result<PathBuf> {
    let project = create_project(ws.root(), "network")?;
    create_file(&project, "variables/dev.tfvars", "env = \"dev\"\n")?;
    create_file(&project, "variables/prod.tfvars", "env = \"prod\"\n")?;
    create_file(&project, "variables/backend/backend_dev.tfvars", "key = \"dev/terraform.tfstate\"\n")?;
    create_file(&project, "variables/backend/backend_prod.tfvars", "key = \"prod/terraform.tfstate\"\n")?;
    Ok(project)
}

/// Scenario: `network` already initialized against its dev backend.
pub fn create_initialized_network_project(ws: &TestWorkspace) -> Result<PathBuf> {
    let project = create_network_project(ws)?;
    write_backend_state(
        &project,
        "s3",
        r#"{"bucket":"acme-state","key":"dev/terraform.tfstate","region":"eu-west-1"}"#,
    )?;
    Ok(project)
}

/// Scenario: two projects both named `app` in different parents.
pub fn create_duplicate_named_projects(ws: &TestWorkspace) -> Result<()> {
    create_project(ws.root(), "team-a/app")?;
    create_project(ws.root(), "team-b/app")?;
    Ok(())
}

/// Scenario: a project with var files but no backend files at all.
pub fn create_project_without_backends(ws: &TestWorkspace) -> Result<PathBuf> {
    let project = create_project(ws.root(), "storage")?;
    create_file(&project, "env/qa.tfvars", "")?;
    Ok(project)
}

/// Scenario: a project with one generic backend and two environment
/// specific ones in sub-folders.
pub fn create_multi_backend_project(ws: &TestWorkspace) -> Result<PathBuf> {
    let project = create_project(ws.root(), "platform")?;
    create_file(&project, "variables/dev2.tfvars", "")?;
    create_file(&project, "variables/backend/backend.tfvars", "")?;
    create_file(&project, "variables/backend/local/backend_dev2.tfvars", "")?;
    create_file(&project, "variables/backend/s3/backend_dev2.tfvars", "")?;
    Ok(project)
}
