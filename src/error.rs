//! Categorized pipeline errors.
//!
//! Every failure in the pipeline is fatal; operations return these
//! variants unchanged to the caller, and only the top-level CLI handler
//! reports them and terminates. Nothing is printed to stdout on failure.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The repository for a subproject could not be opened or cloned.
    #[error("could not retrieve repository for {project}: {source}")]
    Acquire {
        project: String,
        #[source]
        source: git2::Error,
    },

    /// A local checkout exists but is not an openable git repository.
    #[error("could not open repository at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// A tag reference was absent or did not point at a commit.
    #[error("could not resolve tag {tag}: {source}")]
    ResolveTag {
        tag: String,
        #[source]
        source: git2::Error,
    },

    /// The vendoring path was missing or unreadable in the release tree.
    #[error("could not determine subprojects under {path}: {source}")]
    Staging {
        path: String,
        #[source]
        source: git2::Error,
    },

    /// Writing the manifest to the output stream failed.
    #[error("could not write manifest: {source}")]
    Manifest {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
