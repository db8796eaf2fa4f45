//! Repository acquisition (local checkout or transient clone)

use crate::error::Result;
use std::path::Path;
use tracing::info;

pub mod context;
pub mod github;
pub mod local;

pub use context::RepoHandle;

/// Upstream organization every subproject is cloned from.
const GITHUB_ORG_URL: &str = "https://github.com/kubernetes";

/// Obtain the repository for `subproject`.
///
/// If `checkout_root` is set and contains a directory named after the
/// subproject, that checkout is opened from disk. Otherwise the upstream
/// repository is cloned into a transient directory that is removed when
/// the returned handle drops. Nothing is cached or shared between calls.
pub fn subproject_repo(subproject: &str, checkout_root: Option<&Path>) -> Result<RepoHandle> {
    let url = format!("{GITHUB_ORG_URL}/{subproject}");
    match checkout_root {
        Some(root) => {
            let project_path = root.join(subproject);
            if project_path.exists() {
                local::open_repository(&project_path)
            } else {
                info!(
                    "project {} not found; cloning project {} into a transient checkout",
                    project_path.display(),
                    url
                );
                github::clone_repository(subproject, &url)
            }
        }
        None => {
            info!("cloning project {url} into a transient checkout");
            github::clone_repository(subproject, &url)
        }
    }
}
