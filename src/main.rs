/// Main file
mod app_log;
mod args;
mod backend;
mod config;
mod frontend;
mod interactive;
mod layout;
mod process;
mod progressbar;
mod project;
mod project_config;
mod scaffold;
mod template;

use app_log::log_env_init;
use args::*;
use config::Config;
use interactive::TerminalInput;
use process::SystemRunner;
use scaffold::Scaffolder;
use template::TemplateStore;

use anyhow::Result;
use log::debug;
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    generate(args)?;
    Ok(())
}

/// To scaffold a Go + React project, returns its root directory
fn generate(args: AppArgs) -> Result<PathBuf> {
    let config = Config::from_path(&args.config)?;
    let options = config.resolve(args.preset, args.no_install);
    debug!("{:?}", options);

    let templates = match &args.templates {
        Some(dir) => TemplateStore::with_overrides(dir)?,
        None => TemplateStore::builtin(),
    };
    let destination = match args.destination {
        Some(destination) => destination,
        None => env::current_dir()?,
    };

    let mut runner = SystemRunner;
    let mut input = TerminalInput;
    let project = Scaffolder::new(&mut runner, &mut input, &templates, options)
        .run(args.name.as_deref(), &destination)?;

    Ok(project.root().to_path_buf())
}
