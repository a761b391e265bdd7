//! Discovery of per-project README files
//!
//! Mirrors the glob `<projects_dir>/level-*/[0-9][0-9]-*/README.md`. Output is
//! sorted by relative path so every run walks the tree in the same order.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ContractError, Result};
use crate::model::ProjectReadme;

const LEVEL_PREFIX: &str = "level-";
const README_NAME: &str = "README.md";

/// `[0-9][0-9]-*`
fn is_project_dir(name: &str) -> bool {
    matches!(name.as_bytes(), [a, b, b'-', ..] if a.is_ascii_digit() && b.is_ascii_digit())
}

/// Files found by a discovery pass
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// README files, sorted by relative path
    pub readmes: Vec<ProjectReadme>,
    /// Number of `level-*` directories seen, whether or not they held projects
    pub level_count: usize,
}

/// Find and read every project README under `root`
///
/// A missing projects directory is not an error: it yields an empty
/// discovery and lets the count invariant report the problem.
pub fn discover(root: &Path, projects_dir: &str) -> Result<Discovery> {
    let projects = root.join(projects_dir);
    if !projects.is_dir() {
        tracing::warn!(path = %projects.display(), "Projects directory not found");
        return Ok(Discovery::default());
    }

    let mut discovery = Discovery::default();
    for (level_name, level_path) in sorted_dirs(&projects)? {
        let Some(level) = level_name.strip_prefix(LEVEL_PREFIX) else {
            continue;
        };
        discovery.level_count += 1;

        for (project_name, project_path) in sorted_dirs(&level_path)? {
            if !is_project_dir(&project_name) {
                continue;
            }
            let readme_path = project_path.join(README_NAME);
            if !readme_path.is_file() {
                continue;
            }
            let bytes =
                fs::read(&readme_path).map_err(|e| ContractError::io_at(&readme_path, e))?;
            // Invalid sequences become U+FFFD; the rules still see every other line
            let contents = String::from_utf8_lossy(&bytes);
            if matches!(contents, Cow::Owned(_)) {
                tracing::warn!(path = %readme_path.display(), "README is not valid UTF-8");
            }
            let relative = format!(
                "{}/{}/{}/{}",
                projects_dir.trim_end_matches('/'),
                level_name,
                project_name,
                README_NAME
            );
            tracing::trace!(path = %relative, "Discovered project README");
            discovery.readmes.push(ProjectReadme::new(
                readme_path,
                relative,
                level,
                &contents,
            ));
        }
    }

    discovery
        .readmes
        .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    tracing::debug!(
        count = discovery.readmes.len(),
        levels = discovery.level_count,
        "Discovery complete"
    );
    Ok(discovery)
}

/// Subdirectories of `dir` as (name, path), sorted by name
fn sorted_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| ContractError::io_at(dir, e))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ContractError::io_at(dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        // Non-UTF-8 names can never match the ASCII patterns
        if let Some(name) = entry.file_name().to_str() {
            dirs.push((name.to_string(), path));
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_project_dir_shape() {
        assert!(is_project_dir("01-hello"));
        assert!(is_project_dir("15-"));
        assert!(!is_project_dir("1-hello"));
        assert!(!is_project_dir("001-hello"));
        assert!(!is_project_dir("ab-hello"));
    }

    #[test]
    fn test_missing_projects_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover(dir.path(), "projects").unwrap();
        assert!(found.readmes.is_empty());
        assert_eq!(found.level_count, 0);
    }

    #[test]
    fn test_glob_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "projects/level-1/01-hello/README.md", "a");
        touch(root, "projects/level-1/02-world/README.md", "b");
        // wrong prefix shapes
        touch(root, "projects/level-1/1-short/README.md", "x");
        touch(root, "projects/level-1/abc/README.md", "x");
        touch(root, "projects/extras/01-bonus/README.md", "x");
        // wrong file name / depth
        touch(root, "projects/level-1/03-notes/readme.md", "x");
        touch(root, "projects/level-1/README.md", "x");
        touch(root, "projects/level-2/01-deep/sub/README.md", "x");

        let found = discover(root, "projects").unwrap();
        let paths: Vec<_> = found.readmes.iter().map(|r| r.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "projects/level-1/01-hello/README.md",
                "projects/level-1/02-world/README.md",
            ]
        );
        assert_eq!(found.level_count, 2);
        assert_eq!(found.readmes[0].level, "1");
        assert_eq!(found.readmes[1].level, "1");
    }

    #[test]
    fn test_results_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "projects/level-2/01-b/README.md", "");
        touch(root, "projects/level-1/02-a/README.md", "");
        touch(root, "projects/level-1/01-z/README.md", "");

        let found = discover(root, "projects").unwrap();
        let paths: Vec<_> = found.readmes.iter().map(|r| r.relative_path.clone()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects/level-1/01-cafe/README.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"# Caf\xe9\nHome: [README](../../../README.md)\n").unwrap();

        let found = discover(dir.path(), "projects").unwrap();
        assert_eq!(found.readmes.len(), 1);
        assert_eq!(found.readmes[0].line(1), Some("# Caf\u{FFFD}"));
        assert_eq!(
            found.readmes[0].line(2),
            Some("Home: [README](../../../README.md)")
        );
    }

    #[test]
    fn test_readme_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("projects/level-1/01-x/README.md")).unwrap();
        let found = discover(dir.path(), "projects").unwrap();
        assert!(found.readmes.is_empty());
    }
}
