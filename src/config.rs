use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// The two known layouts of a scaffolded project
#[derive(Deserialize, Serialize, ValueEnum, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// shared/utils directory, npm generated package.json
    #[default]
    Classic,
    /// MongoDB ping, fixed package.json, index.html
    Vite,
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Classic => write!(f, "classic"),
            Preset::Vite => write!(f, "vite"),
        }
    }
}

/// Switches deciding which variant of the project gets generated
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScaffoldOptions {
    pub include_shared_utils_dir: bool,
    pub overwrite_frontend_manifest: bool,
    pub include_index_html: bool,
    pub include_mongo_ping_check: bool,
    pub run_installers: bool,
}

impl From<Preset> for ScaffoldOptions {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Classic => Self {
                include_shared_utils_dir: true,
                overwrite_frontend_manifest: false,
                include_index_html: false,
                include_mongo_ping_check: false,
                run_installers: true,
            },
            Preset::Vite => Self {
                include_shared_utils_dir: false,
                overwrite_frontend_manifest: true,
                include_index_html: true,
                include_mongo_ping_check: true,
                run_installers: true,
            },
        }
    }
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Preset::default().into()
    }
}

/// Content of the file passed with `--config`, every key is optional
#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub preset: Option<Preset>,
    pub include_shared_utils_dir: Option<bool>,
    pub overwrite_frontend_manifest: Option<bool>,
    pub include_index_html: Option<bool>,
    pub include_mongo_ping_check: Option<bool>,
    pub run_installers: Option<bool>,
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    pub(crate) fn from_path(path: &Option<impl AsRef<Path>>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let path = path.as_ref();
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("cannot read options file {}", path.display()))?;
                Self::try_from(contents)
                    .with_context(|| format!("invalid options file {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(config)
    }

    /// Merge preset and explicit switches; a preset given on the command line wins
    /// over the one in the file, explicit switches win over any preset.
    pub fn resolve(&self, cli_preset: Option<Preset>, no_install: bool) -> ScaffoldOptions {
        let preset = cli_preset.or(self.preset).unwrap_or_default();
        let mut options = ScaffoldOptions::from(preset);
        if let Some(v) = self.include_shared_utils_dir {
            options.include_shared_utils_dir = v;
        }
        if let Some(v) = self.overwrite_frontend_manifest {
            options.overwrite_frontend_manifest = v;
        }
        if let Some(v) = self.include_index_html {
            options.include_index_html = v;
        }
        if let Some(v) = self.include_mongo_ping_check {
            options.include_mongo_ping_check = v;
        }
        if let Some(v) = self.run_installers {
            options.run_installers = v;
        }
        if no_install {
            options.run_installers = false;
        }
        options
    }
}
