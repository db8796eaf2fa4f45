//! Repository handle management

use git2::Repository;
use std::fmt;
use std::path::PathBuf;

/// An open repository plus the transient checkout backing it, if the
/// repository was cloned rather than opened from disk.
///
/// Dropping a transient handle removes its checkout directory, so a clone
/// never outlives the single resolution that needed it.
pub struct RepoHandle {
    repo: Repository,
    temp_dir: Option<PathBuf>,
}

impl RepoHandle {
    /// Wrap a repository opened from an existing local checkout.
    pub fn local(repo: Repository) -> Self {
        Self { repo, temp_dir: None }
    }

    /// Wrap a repository cloned into `temp_dir`; the directory is removed
    /// when the handle drops.
    pub fn transient(repo: Repository, temp_dir: PathBuf) -> Self {
        Self { repo, temp_dir: Some(temp_dir) }
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }
}

impl fmt::Debug for RepoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoHandle")
            .field("workdir", &self.repo.workdir())
            .field("temp_dir", &self.temp_dir)
            .finish()
    }
}

impl Drop for RepoHandle {
    fn drop(&mut self) {
        if let Some(dir) = &self.temp_dir {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
