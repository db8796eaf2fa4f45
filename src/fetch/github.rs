//! Transient cloning of upstream repositories

use crate::error::{Error, Result};
use crate::fetch::RepoHandle;
use git2::Repository;
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Clone `url` into a unique temporary directory.
///
/// The clone is full, not shallow: tag resolution needs the tag refs and
/// the commits behind them, which a depth-1 fetch does not carry.
pub fn clone_repository(project: &str, url: &str) -> Result<RepoHandle> {
    let temp_dir = build_temp_repo_dir();
    let repo = Repository::clone(url, &temp_dir).map_err(|source| {
        let _ = std::fs::remove_dir_all(&temp_dir);
        Error::Acquire { project: project.to_string(), source }
    })?;
    Ok(RepoHandle::transient(repo, temp_dir))
}

fn build_temp_repo_dir() -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    let pid = std::process::id();
    env::temp_dir().join(format!("vendor-kubernetes-{pid}-{nanos}"))
}
