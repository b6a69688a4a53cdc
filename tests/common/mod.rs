//! Shared test utilities for lazytf integration tests
//!
//! Builds throwaway directory trees that look like Terraform workspaces and
//! provides predicates for the command output.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
