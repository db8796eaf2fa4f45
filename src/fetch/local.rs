//! Opening existing local checkouts

use crate::error::{Error, Result};
use crate::fetch::RepoHandle;
use git2::Repository;
use std::path::Path;

pub fn open_repository(path: &Path) -> Result<RepoHandle> {
    let repo = Repository::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RepoHandle::local(repo))
}

#[cfg(test)]
mod tests {
    use super::open_repository;
    use crate::error::Error;
    use git2::Repository;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn opens_an_existing_repository() {
        let temp = TempDir::new().expect("tmp");
        Repository::init(temp.path()).expect("init repo");

        let handle = open_repository(temp.path()).expect("open");
        assert!(handle.repo().path().exists());
    }

    #[test]
    fn rejects_a_directory_that_is_not_a_repository() {
        let temp = TempDir::new().expect("tmp");
        let dir = temp.path().join("plain");
        fs::create_dir(&dir).expect("mkdir");

        let err = open_repository(&dir).expect_err("should fail");
        assert!(matches!(err, Error::Open { .. }));
    }
}
