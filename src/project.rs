use std::{
    fmt::Display,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use regex::Regex;
use thiserror::Error;

/// Name used when the operator just presses enter
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("`{name}` is not a valid project name, use letters, digits, `.`, `_` and `-` only")]
    Invalid { name: String },
}

fn valid_name() -> &'static Regex {
    static VALID_NAME: OnceLock<Regex> = OnceLock::new();
    VALID_NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("project name regex is valid")
    })
}

/// Trim the raw answer and substitute the default for an empty one.
pub fn resolve_project_name(raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// A name is used verbatim as a directory, so anything that could escape
/// the destination is refused.
pub fn check_project_name(name: &str) -> Result<(), NameError> {
    if !valid_name().is_match(name) {
        return Err(NameError::Invalid {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Name and root directory of the project being scaffolded
#[derive(Debug, PartialEq, Clone)]
pub struct ProjectDescriptor {
    name: String,
    root: PathBuf,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>, destination: impl AsRef<Path>) -> Result<Self, NameError> {
        let name = name.into();
        check_project_name(&name)?;
        let root = destination.as_ref().join(&name);
        Ok(Self { name, root })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn backend_dir(&self) -> PathBuf {
        self.root.join("backend")
    }

    pub fn frontend_dir(&self) -> PathBuf {
        self.root.join("frontend")
    }
}

impl Display for ProjectDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.root.display().fmt(f)
    }
}
