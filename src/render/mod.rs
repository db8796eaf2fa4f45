//! Manifest rendering (pseudo-versions, require/replace blocks)

use chrono::{DateTime, Utc};
use git2::Commit;
use std::io::Write;

/// Module prefix shared by the kubernetes module and every staged subproject.
pub const MODULE_PREFIX: &str = "k8s.io";

/// A `replace` line pinning one module to a pseudo-version.
pub struct ReplaceDirective {
    module: String,
    pseudo_version: String,
}

impl ReplaceDirective {
    pub fn new(subproject: &str, pseudo_version: String) -> Self {
        Self { module: format!("{MODULE_PREFIX}/{subproject}"), pseudo_version }
    }

    /// Build the directive pinning `subproject` at `commit`.
    pub fn for_commit(subproject: &str, commit: &Commit<'_>) -> Self {
        Self::new(subproject, pseudo_version(commit.time().seconds(), &commit.id().to_string()))
    }
}

/// Synthesize a go.mod pseudo-version from a commit timestamp and hash.
///
/// The date part is the UTC committer time as `YYYYMMDDHHMMSS`, each
/// component zero-padded to two digits; the revision part is the first 12
/// hex characters of the commit hash.
pub fn pseudo_version(committer_seconds: i64, commit_hex: &str) -> String {
    let when = DateTime::<Utc>::from_timestamp(committer_seconds, 0).unwrap_or_default();
    let revision: String = commit_hex.chars().take(12).collect();
    format!("v0.0.0-{}-{}", when.format("%Y%m%d%H%M%S"), revision)
}

/// Write the full manifest: the pinned require block, a blank line, then
/// one replace line per subproject in discovery order.
pub fn write_manifest<W: Write>(
    out: &mut W,
    kubernetes_tag: &str,
    replaces: &[ReplaceDirective],
) -> std::io::Result<()> {
    writeln!(out, "require (")?;
    writeln!(out, "  {MODULE_PREFIX}/kubernetes v{kubernetes_tag}")?;
    writeln!(out, ")")?;
    writeln!(out)?;
    writeln!(out, "replace (")?;
    for replace in replaces {
        writeln!(out, "  {} => {} {}", replace.module, replace.module, replace.pseudo_version)?;
    }
    writeln!(out, ")")?;
    Ok(())
}
