use anyhow::{bail, Context, Result};
use console::style;
use indicatif::ProgressBar;
use liquid::model::KString;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};
use log::debug;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;
use std::{
    fs,
    path::Path,
};

use crate::config::ScaffoldOptions;
use crate::progressbar;
use crate::progressbar::spinner;
use crate::project::ProjectDescriptor;

/// Every file the scaffolder can emit, addressed by a dotted key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    BackendMain,
    BackendMainWithPing,
    FrontendAppComponent,
    FrontendStylesheet,
    FrontendBootstrap,
    FrontendTailwindConfig,
    FrontendManifest,
    FrontendIndexHtml,
    NextSteps,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 9] = [
        TemplateKey::BackendMain,
        TemplateKey::BackendMainWithPing,
        TemplateKey::FrontendAppComponent,
        TemplateKey::FrontendStylesheet,
        TemplateKey::FrontendBootstrap,
        TemplateKey::FrontendTailwindConfig,
        TemplateKey::FrontendManifest,
        TemplateKey::FrontendIndexHtml,
        TemplateKey::NextSteps,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::BackendMain => "backend.main",
            TemplateKey::BackendMainWithPing => "backend.main_with_ping",
            TemplateKey::FrontendAppComponent => "frontend.app_component",
            TemplateKey::FrontendStylesheet => "frontend.stylesheet",
            TemplateKey::FrontendBootstrap => "frontend.bootstrap",
            TemplateKey::FrontendTailwindConfig => "frontend.tailwind_config",
            TemplateKey::FrontendManifest => "frontend.manifest",
            TemplateKey::FrontendIndexHtml => "frontend.index_html",
            TemplateKey::NextSteps => "instructions.next_steps",
        }
    }

    const fn builtin(&self) -> &'static str {
        match self {
            TemplateKey::BackendMain => include_str!("templates/backend/main.go.liquid"),
            TemplateKey::BackendMainWithPing => {
                include_str!("templates/backend/main_with_ping.go.liquid")
            }
            TemplateKey::FrontendAppComponent => include_str!("templates/frontend/App.jsx.liquid"),
            TemplateKey::FrontendStylesheet => include_str!("templates/frontend/index.css.liquid"),
            TemplateKey::FrontendBootstrap => include_str!("templates/frontend/main.jsx.liquid"),
            TemplateKey::FrontendTailwindConfig => {
                include_str!("templates/frontend/tailwind.config.js.liquid")
            }
            TemplateKey::FrontendManifest => include_str!("templates/frontend/package.json.liquid"),
            TemplateKey::FrontendIndexHtml => include_str!("templates/frontend/index.html.liquid"),
            TemplateKey::NextSteps => include_str!("templates/instructions/next_steps.liquid"),
        }
    }

    /// File name looked up in a `--templates` directory
    pub fn override_file_name(&self) -> String {
        format!("{}.liquid", self.as_str())
    }
}

impl Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .build()
        .expect("can't fail due to no partials support")
}

/// create liquid object for the templates, pre-filled with everything they may reference
pub fn create_liquid_object(project: &ProjectDescriptor, options: &ScaffoldOptions) -> Object {
    let mut liquid_object = Object::new();
    liquid_object.insert(
        "project_name".into(),
        Value::Scalar(project.name().to_owned().into()),
    );
    liquid_object.insert(
        "manifest_overwritten".into(),
        Value::Scalar(options.overwrite_frontend_manifest.into()),
    );
    liquid_object.insert(
        "installed".into(),
        Value::Scalar(options.run_installers.into()),
    );
    liquid_object
}

/// Named template sources plus the engine that renders them
pub struct TemplateStore {
    parser: Parser,
    overrides: HashMap<TemplateKey, String>,
}

impl TemplateStore {
    pub fn builtin() -> Self {
        Self {
            parser: create_liquid_engine(),
            overrides: HashMap::new(),
        }
    }

    /// Use `<dir>/<key>.liquid` in place of the built-in source wherever such a file exists
    pub fn with_overrides(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            bail!("template directory `{}` does not exist", dir.display());
        }
        let mut store = Self::builtin();
        for key in TemplateKey::ALL {
            let file = dir.join(key.override_file_name());
            if file.is_file() {
                let source = fs::read_to_string(&file)
                    .with_context(|| format!("cannot read template {}", file.display()))?;
                debug!("template `{key}` overridden by {}", file.display());
                store.overrides.insert(key, source);
            }
        }
        Ok(store)
    }

    pub fn source(&self, key: TemplateKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.builtin())
    }

    pub fn render(&self, key: TemplateKey, params: &Object) -> Result<String> {
        let mut context = params.clone();
        render_string_gracefully(&mut context, &self.parser, self.source(key))
            .with_context(|| format!("cannot render template `{key}`"))
    }
}

fn requested_variable() -> &'static regex::Regex {
    static REQUESTED_VARIABLE: OnceLock<regex::Regex> = OnceLock::new();
    REQUESTED_VARIABLE.get_or_init(|| {
        regex::Regex::new(r"(?P<p>.*requested\svariable=)(?P<v>.*)")
            .expect("requested variable regex is valid")
    })
}

/// Render, substituting an empty string for every variable the context lacks
pub fn render_string_gracefully(
    context: &mut Object,
    parser: &Parser,
    content: &str,
) -> Result<String> {
    let template = parser.parse(content)?;

    loop {
        let err = match template.render(&*context) {
            Ok(rendered) => return Ok(rendered),
            Err(e) => e,
        };
        let msg = err.to_string();
        let missing_variable = requested_variable()
            .captures(msg.as_str())
            .and_then(|captures| captures.name("v"))
            .map(|v| KString::from(v.as_str().trim().to_string()));
        match missing_variable {
            Some(name) if !context.contains_key(name.as_str()) => {
                debug!("template variable `{name}` is unknown, rendering it empty");
                context.insert(name, Value::scalar("".to_string()));
            }
            _ => bail!(err),
        }
    }
}

/// Render `files` into `dir`, one progress line per file.
/// `files` holds paths relative to `dir`.
pub fn write_files(
    dir: &Path,
    files: &[(&str, TemplateKey)],
    store: &TemplateStore,
    liquid_object: &Object,
) -> Result<()> {
    let mp = progressbar::new();
    let spinner_style = spinner();

    let total = files.len().to_string();
    for (progress, (filename, key)) in files.iter().enumerate() {
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Writing: {filename}"));

        let contents = store.render(*key, liquid_object)?;
        pb.inc(25);
        let filepath = dir.join(filename);
        if let Some(parent) = filepath.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {}", parent.display()))?;
        }
        fs::write(&filepath, contents).with_context(|| {
            format!(
                "⛔ {} `{}`",
                style("Error writing rendered file.").bold().red(),
                style(filepath.display()).bold()
            )
        })?;
        pb.inc(25);
        pb.finish_with_message(format!("Done: {filename}"));
        debug!("wrote {}", filepath.display());
    }

    Ok(())
}
