//! vendor-kubernetes: Generate go.mod pins for a Kubernetes release
//!
//! Resolves a Kubernetes release tag, enumerates the subprojects vendored
//! under `staging/src/k8s.io`, resolves each subproject's matching tag in
//! its own repository, and prints a `require`/`replace` snippet pinning
//! every module to the commit behind that release.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod render;
pub mod resolve;
pub mod staging;
