//! The manifest-generation pipeline

use crate::error::{Error, Result};
use crate::fetch;
use crate::render::{self, ReplaceDirective};
use crate::resolve;
use crate::staging;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Configuration for one manifest-generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory containing already-checked-out k8s.io repositories.
    /// Subprojects missing there are cloned transiently instead.
    pub kubernetes_path: Option<PathBuf>,
    /// Release tag the manifest pins, e.g. `1.15.3`.
    pub kubernetes_tag: String,
}

/// Generate the manifest for `opts.kubernetes_tag` and write it to `out`.
///
/// Strictly sequential: the root release is resolved first, then each
/// staged subproject in turn. Nothing is written until every subproject
/// has resolved, so a failure anywhere produces no output at all.
pub fn run<W: Write>(opts: &GenerateOptions, out: &mut W) -> Result<()> {
    let checkout_root = opts.kubernetes_path.as_deref();

    let root = fetch::subproject_repo("kubernetes", checkout_root)?;
    let root_tag = resolve::subproject_tag("kubernetes", &opts.kubernetes_tag);
    let root_commit = resolve::tag_commit(root.repo(), &root_tag)?;
    let tree = root_commit
        .tree()
        .map_err(|source| Error::ResolveTag { tag: root_tag.clone(), source })?;
    let subprojects = staging::subprojects(root.repo(), &tree)?;
    debug!("discovered {} staged subprojects", subprojects.len());

    let mut replaces = Vec::with_capacity(subprojects.len());
    for subproject in &subprojects {
        let handle = fetch::subproject_repo(subproject, checkout_root)?;
        let tag = resolve::subproject_tag(subproject, &opts.kubernetes_tag);
        let commit = resolve::tag_commit(handle.repo(), &tag)?;
        replaces.push(ReplaceDirective::for_commit(subproject, &commit));
    }

    render::write_manifest(out, &opts.kubernetes_tag, &replaces)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{IndexAddOption, Oid, Repository, Signature};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn init_tagged_repo(path: &Path, tag: &str, files: &[&str]) -> Oid {
        let repo = Repository::init(path).expect("init repo");
        for file in files {
            let full = path.join(file);
            fs::create_dir_all(full.parent().expect("parent")).expect("mkdir");
            fs::write(full, "placeholder\n").expect("write file");
        }
        let mut index = repo.index().expect("index");
        index.add_all(["*"], IndexAddOption::DEFAULT, None).expect("add all");
        index.write().expect("write index");
        let tree_oid = index.write_tree().expect("write tree");
        let tree = repo.find_tree(tree_oid).expect("find tree");
        let sig = Signature::now("Test", "test@example.com").expect("sig");
        let oid = repo.commit(Some("HEAD"), &sig, &sig, "release", &tree, &[]).expect("commit");
        let commit = repo.find_commit(oid).expect("find commit");
        repo.tag(tag, commit.as_object(), &sig, tag, false).expect("tag");
        oid
    }

    fn fixture_release(root: &Path, tag: &str) -> (Oid, Oid) {
        init_tagged_repo(
            &root.join("kubernetes"),
            &format!("v{tag}"),
            &[
                "staging/src/k8s.io/api/doc.go",
                "staging/src/k8s.io/client-go/doc.go",
                "cmd/kubectl/main.go",
            ],
        );
        let api = init_tagged_repo(&root.join("api"), &format!("kubernetes-{tag}"), &["doc.go"]);
        let client_go =
            init_tagged_repo(&root.join("client-go"), &format!("kubernetes-{tag}"), &["doc.go"]);
        (api, client_go)
    }

    #[test]
    fn generates_manifest_for_local_checkouts() {
        let root = TempDir::new().expect("tmp");
        let (api_oid, client_go_oid) = fixture_release(root.path(), "1.2.3");

        let opts = GenerateOptions {
            kubernetes_path: Some(root.path().to_path_buf()),
            kubernetes_tag: "1.2.3".to_string(),
        };
        let mut out = Vec::new();
        run(&opts, &mut out).expect("run");
        let manifest = String::from_utf8(out).expect("utf8");

        assert!(manifest.starts_with("require (\n  k8s.io/kubernetes v1.2.3\n)\n\nreplace (\n"));

        let replaces: Vec<&str> = manifest.lines().filter(|l| l.contains("=>")).collect();
        assert_eq!(replaces.len(), 2, "one replace line per staged subproject");
        assert!(replaces[0].starts_with("  k8s.io/api => k8s.io/api v0.0.0-"));
        assert!(replaces[1].starts_with("  k8s.io/client-go => k8s.io/client-go v0.0.0-"));

        for (line, oid) in replaces.iter().zip([api_oid, client_go_oid]) {
            let pseudo = line.rsplit(' ').next().expect("pseudo-version");
            let rest = pseudo.strip_prefix("v0.0.0-").expect("prefix");
            let (date, revision) = rest.split_once('-').expect("date-revision");
            assert_eq!(date.len(), 14);
            assert!(date.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(revision, &oid.to_string()[..12]);
        }
    }

    #[test]
    fn output_is_deterministic_across_runs() {
        let root = TempDir::new().expect("tmp");
        fixture_release(root.path(), "1.2.3");

        let opts = GenerateOptions {
            kubernetes_path: Some(root.path().to_path_buf()),
            kubernetes_tag: "1.2.3".to_string(),
        };
        let mut first = Vec::new();
        run(&opts, &mut first).expect("first run");
        let mut second = Vec::new();
        run(&opts, &mut second).expect("second run");

        assert_eq!(first, second);
    }

    #[test]
    fn missing_root_tag_fails_with_no_output() {
        let root = TempDir::new().expect("tmp");
        init_tagged_repo(
            &root.path().join("kubernetes"),
            "v1.0.0",
            &["staging/src/k8s.io/api/doc.go"],
        );

        let opts = GenerateOptions {
            kubernetes_path: Some(root.path().to_path_buf()),
            kubernetes_tag: "1.2.3".to_string(),
        };
        let mut out = Vec::new();
        let err = run(&opts, &mut out).expect_err("should fail");

        assert!(matches!(err, Error::ResolveTag { .. }));
        assert!(out.is_empty(), "no partial manifest on failure");
    }

    #[test]
    fn failing_subproject_aborts_without_output() {
        let root = TempDir::new().expect("tmp");
        init_tagged_repo(
            &root.path().join("kubernetes"),
            "v1.2.3",
            &["staging/src/k8s.io/api/doc.go"],
        );
        // `api` exists on disk but is not a repository, so acquisition
        // fails before any cloning is attempted.
        fs::create_dir_all(root.path().join("api")).expect("mkdir api");

        let opts = GenerateOptions {
            kubernetes_path: Some(root.path().to_path_buf()),
            kubernetes_tag: "1.2.3".to_string(),
        };
        let mut out = Vec::new();
        let err = run(&opts, &mut out).expect_err("should fail");

        assert!(matches!(err, Error::Open { .. }));
        assert!(out.is_empty(), "no partial manifest on failure");
    }
}
