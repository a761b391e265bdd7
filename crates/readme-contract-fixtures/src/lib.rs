//! Fixture trees for the README contract test suites
//!
//! Builds a throwaway `projects/level-N/NN-slug/README.md` tree whose files
//! satisfy the default contract, then lets a test break individual files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A README body satisfying every default rule for the given level
pub fn valid_readme(level: usize) -> String {
    format!(
        "# Level {level} project\n\
         Home: [README](../../../README.md)\n\
         \n\
         ## Focus\n\
         \n\
         Practice one idea at a time.\n\
         \n\
         Use `<repo-root>` as the folder containing this repository's `README.md`.\n\
         \n\
         ## Run (copy/paste)\n\
         \n\
         ```bash\n\
         cd <repo-root>\n\
         python projects/level-{level}/project.py\n\
         ```\n\
         \n\
         ## Expected terminal output\n\
         \n\
         ```text\n\
         done\n\
         ```\n\
         \n\
         ## Expected artifacts\n\
         \n\
         - data/output.txt\n\
         \n\
         ## Alter it (required)\n\
         \n\
         Change the input file.\n\
         \n\
         ## Break it (required)\n\
         \n\
         Delete the input file.\n\
         \n\
         ## Fix it (required)\n\
         \n\
         Restore the input file.\n\
         \n\
         ## Explain it (teach-back)\n\
         \n\
         Describe the flow.\n\
         \n\
         ## Mastery check\n\
         \n\
         Rebuild it from memory.\n\
         \n\
         ## Next\n\
         \n\
         Go back to [Level {level} index](../README.md).\n"
    )
}

/// A temporary curriculum tree with `levels × per_level` valid READMEs
pub struct ProjectTree {
    dir: TempDir,
    levels: usize,
    per_level: usize,
}

impl ProjectTree {
    /// Levels are numbered from 1, projects from 01
    pub fn new(levels: usize, per_level: usize) -> io::Result<Self> {
        let tree = Self {
            dir: tempfile::tempdir()?,
            levels,
            per_level,
        };
        fs::write(tree.root().join("README.md"), "# Curriculum\n")?;
        for level in 1..=levels {
            for project in 1..=per_level {
                tree.write(level, project, &valid_readme(level))?;
            }
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn per_level(&self) -> usize {
        self.per_level
    }

    pub fn total(&self) -> usize {
        self.levels * self.per_level
    }

    /// Path relative to the root, as it appears in reports
    pub fn relative_path(&self, level: usize, project: usize) -> String {
        format!(
            "projects/level-{}/{:02}-project-{:02}/README.md",
            level, project, project
        )
    }

    pub fn readme_path(&self, level: usize, project: usize) -> PathBuf {
        self.root().join(self.relative_path(level, project))
    }

    /// Overwrite one README with raw bytes
    pub fn write_bytes(&self, level: usize, project: usize, contents: &[u8]) -> io::Result<()> {
        fs::write(self.readme_path(level, project), contents)
    }

    /// Overwrite one README, creating its directories as needed
    pub fn write(&self, level: usize, project: usize, contents: &str) -> io::Result<()> {
        let path = self.readme_path(level, project);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    /// Rewrite one README through `edit`
    pub fn edit<F>(&self, level: usize, project: usize, edit: F) -> io::Result<()>
    where
        F: FnOnce(String) -> String,
    {
        let path = self.readme_path(level, project);
        let contents = fs::read_to_string(&path)?;
        fs::write(path, edit(contents))
    }

    /// Delete one project directory
    pub fn remove(&self, level: usize, project: usize) -> io::Result<()> {
        let path = self.readme_path(level, project);
        match path.parent() {
            Some(dir) => fs::remove_dir_all(dir),
            None => Ok(()),
        }
    }
}
