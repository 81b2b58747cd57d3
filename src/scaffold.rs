//! Sequences the scaffold: name, root, directories, backend, frontend,
//! then the operator instructions. The first failing step ends the run and
//! whatever was created so far stays on disk.

use anyhow::{Context, Result};
use console::style;
use log::info;
use std::fs;
use std::path::Path;

use crate::backend::init_backend;
use crate::config::ScaffoldOptions;
use crate::frontend::init_frontend;
use crate::interactive::{self, InputProvider};
use crate::layout::create_folder_structure;
use crate::process::CommandRunner;
use crate::project::{resolve_project_name, ProjectDescriptor};
use crate::project_config::{check_not_scaffolded, write_project_config_file, ProjectConfig};
use crate::template::{create_liquid_object, TemplateKey, TemplateStore};

pub struct Scaffolder<'a> {
    runner: &'a mut dyn CommandRunner,
    input: &'a mut dyn InputProvider,
    templates: &'a TemplateStore,
    options: ScaffoldOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        runner: &'a mut dyn CommandRunner,
        input: &'a mut dyn InputProvider,
        templates: &'a TemplateStore,
        options: ScaffoldOptions,
    ) -> Self {
        Self {
            runner,
            input,
            templates,
            options,
        }
    }

    /// Scaffold below `destination`; the name is asked for when `name` is `None`.
    pub fn run(&mut self, name: Option<&str>, destination: &Path) -> Result<ProjectDescriptor> {
        let name = match name {
            Some(name) => resolve_project_name(name),
            None => interactive::project_name(self.input)?,
        };
        let project = ProjectDescriptor::new(name, destination)?;
        check_not_scaffolded(project.root())?;

        info!(
            "🔧 {}",
            style(format!("Creating project: {}", project.name()))
                .bold()
                .yellow()
        );
        fs::create_dir_all(project.root())
            .with_context(|| format!("cannot create project root {project}"))?;

        create_folder_structure(project.root(), &self.options)
            .context("directory setup failed")?;

        let liquid_object = create_liquid_object(&project, &self.options);
        init_backend(
            &project,
            &self.options,
            self.runner,
            self.templates,
            &liquid_object,
        )
        .context("backend setup failed")?;
        init_frontend(
            &project,
            &self.options,
            self.runner,
            self.templates,
            &liquid_object,
        )
        .context("frontend setup failed")?;

        write_project_config_file(
            project.root(),
            &ProjectConfig::new(project.name(), self.options),
        )?;

        info!(
            "✨ {} {} {}",
            style("Done!").bold().green(),
            style("Project setup complete!").bold(),
            style(&project).underlined()
        );
        let next_steps = self
            .templates
            .render(TemplateKey::NextSteps, &liquid_object)?;
        info!("{next_steps}");

        Ok(project)
    }
}
