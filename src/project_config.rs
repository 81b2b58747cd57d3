use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::ScaffoldOptions;

/// Written into the root of every finished project
pub const PROJECT_CONFIG_FILE_NAME: &str = ".stackforge.toml";

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ProjectConfig {
    pub project: ProjectInfo,
    pub options: ScaffoldOptions,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ProjectInfo {
    pub name: String,
    pub generator_version: String,
}

impl TryFrom<String> for ProjectConfig {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl ProjectConfig {
    pub fn new(name: &str, options: ScaffoldOptions) -> Self {
        Self {
            project: ProjectInfo {
                name: name.to_string(),
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            options,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::try_from(contents)?)
    }
}

/// Refuse to scaffold over a project this tool already generated
pub fn check_not_scaffolded(project_root: impl AsRef<Path>) -> Result<()> {
    let config_file = project_root.as_ref().join(PROJECT_CONFIG_FILE_NAME);
    if config_file.exists() {
        let recorded = ProjectConfig::from_path(&config_file)
            .with_context(|| format!("unreadable scaffold record {}", config_file.display()))?;
        bail!(
            "project `{}` already scaffolded ({} exists), re-scaffolding is not supported",
            recorded.project.name,
            config_file.display()
        );
    }
    Ok(())
}

pub fn write_project_config_file(
    project_root: impl AsRef<Path>,
    config: &ProjectConfig,
) -> Result<()> {
    let config_file = project_root.as_ref().join(PROJECT_CONFIG_FILE_NAME);
    let toml_string = toml::to_string(config)?;
    fs::write(&config_file, toml_string)
        .with_context(|| format!("cannot write {}", config_file.display()))?;
    Ok(())
}
