//! Tag naming and tag-to-commit resolution

use crate::error::{Error, Result};
use git2::{Commit, Repository};

/// Derive the tag a subproject publishes for a Kubernetes release.
///
/// The kubernetes repository itself tags releases as `v<tag>`; every
/// staged subproject mirrors the same release as `kubernetes-<tag>`.
pub fn subproject_tag(subproject: &str, kubernetes_tag: &str) -> String {
    if subproject == "kubernetes" {
        format!("v{kubernetes_tag}")
    } else {
        format!("kubernetes-{kubernetes_tag}")
    }
}

/// Resolve a tag name to the commit it points at.
///
/// Annotated tags are dereferenced to their target commit; lightweight
/// tags resolve directly.
pub fn tag_commit<'repo>(repo: &'repo Repository, tag: &str) -> Result<Commit<'repo>> {
    let ref_name = format!("refs/tags/{tag}");
    let reference = repo.find_reference(&ref_name).map_err(|source| Error::ResolveTag {
        tag: tag.to_string(),
        source,
    })?;
    reference.peel_to_commit().map_err(|source| Error::ResolveTag {
        tag: tag.to_string(),
        source,
    })
}
