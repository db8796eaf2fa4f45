//! Enumeration of staged subprojects in a release tree

use crate::error::{Error, Result};
use git2::{ObjectType, Repository, Tree};
use std::path::Path;

/// Path under which the kubernetes repository vendors its subprojects.
pub const STAGING_PATH: &str = "staging/src/k8s.io";

/// List the immediate subdirectories of `staging/src/k8s.io` in `tree`.
///
/// Only direct tree-mode entries count: files are skipped, nothing is
/// walked recursively. Names come back in git tree order (sorted by name)
/// and are collected exactly once per run.
pub fn subprojects(repo: &Repository, tree: &Tree<'_>) -> Result<Vec<String>> {
    let entry = tree
        .get_path(Path::new(STAGING_PATH))
        .map_err(|source| Error::Staging { path: STAGING_PATH.to_string(), source })?;
    let staging_tree = repo
        .find_tree(entry.id())
        .map_err(|source| Error::Staging { path: STAGING_PATH.to_string(), source })?;

    let mut names = Vec::new();
    for child in staging_tree.iter() {
        if child.kind() != Some(ObjectType::Tree) {
            continue;
        }
        if let Some(name) = child.name() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
