use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::Error;

const ANCHOR_MANIFEST: &str = "Anchor.toml";

/// An Anchor workspace, rooted at the directory holding `Anchor.toml`
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Climb from `start` through its ancestors until an `Anchor.toml` is found
    pub fn discover(start: &Path) -> Result<Self, Error> {
        for dir in start.ancestors() {
            if dir.join(ANCHOR_MANIFEST).is_file() {
                debug!(root = %dir.display(), "found anchor workspace");
                return Ok(Self {
                    root: dir.to_path_buf(),
                });
            }
        }

        Err(Error::WorkspaceDiscovery(format!(
            "no {} in {} or any parent directory",
            ANCHOR_MANIFEST,
            start.display()
        )))
    }

    /// Where `anchor build` writes program IDLs
    pub fn idl_dir(&self) -> PathBuf {
        self.root.join("target").join("idl")
    }

    pub fn idl_path(&self, program: &str) -> PathBuf {
        self.idl_dir()
            .join(format!("{}.json", normalize_program_name(program)))
    }

    /// Names of all programs with a built IDL, sorted
    pub fn programs(&self) -> Result<Vec<String>, Error> {
        let idl_dir = self.idl_dir();
        if !idl_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut programs = Vec::new();
        for entry in fs::read_dir(&idl_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                programs.push(stem.to_string());
            }
        }

        programs.sort();
        Ok(programs)
    }

    /// Pick the IDL to visualize.
    ///
    /// An explicit program name must have an IDL. Without one, the current
    /// directory name is tried (so running from `programs/<name>` works),
    /// then the workspace's only program if there is exactly one.
    pub fn resolve(&self, program: Option<&str>, cwd: &Path) -> Result<PathBuf, Error> {
        if let Some(program) = program {
            let path = self.idl_path(program);
            if path.is_file() {
                return Ok(path);
            }
            return Err(Error::IdlNotFound {
                program: program.to_string(),
                path,
            });
        }

        if let Some(dir_name) = cwd.file_name().and_then(|n| n.to_str()) {
            let path = self.idl_path(dir_name);
            if path.is_file() {
                debug!(program = dir_name, "using current directory as program name");
                return Ok(path);
            }
        }

        let programs = self.programs()?;
        match programs.as_slice() {
            [only] => Ok(self.idl_path(only)),
            [] => Err(Error::WorkspaceDiscovery(format!(
                "no IDLs in {}, run `anchor build` first",
                self.idl_dir().display()
            ))),
            _ => Err(Error::WorkspaceDiscovery(format!(
                "several programs found ({}), pick one with --program-name",
                programs.join(", ")
            ))),
        }
    }
}

/// Anchor names IDL files after the crate's lib name, which uses underscores
pub fn normalize_program_name(program: &str) -> String {
    program.trim().replace('-', "_")
}
