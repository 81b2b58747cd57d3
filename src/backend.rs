use anyhow::Result;
use liquid_core::Object;
use log::info;

use crate::config::ScaffoldOptions;
use crate::process::{run_checked, CommandRunner, ShellCommand};
use crate::project::ProjectDescriptor;
use crate::template::{write_files, TemplateKey, TemplateStore};

pub const GO_MODULE_NAME: &str = "backend";
pub const GO_DEPENDENCIES: [&str; 2] = [
    "github.com/gofiber/fiber/v2",
    "go.mongodb.org/mongo-driver",
];

/// `go mod init` followed by `go get`, in that order
pub fn backend_commands() -> Vec<ShellCommand> {
    vec![
        ShellCommand::new("go", ["mod", "init", GO_MODULE_NAME]),
        ShellCommand::new("go", ["get"].into_iter().chain(GO_DEPENDENCIES)),
    ]
}

pub fn main_template(options: &ScaffoldOptions) -> TemplateKey {
    if options.include_mongo_ping_check {
        TemplateKey::BackendMainWithPing
    } else {
        TemplateKey::BackendMain
    }
}

/// Initialize the Go module and write the Fiber server skeleton
pub fn init_backend(
    project: &ProjectDescriptor,
    options: &ScaffoldOptions,
    runner: &mut dyn CommandRunner,
    store: &TemplateStore,
    liquid_object: &Object,
) -> Result<()> {
    info!("Initializing backend...");
    let backend_dir = project.backend_dir();

    if options.run_installers {
        for command in backend_commands() {
            run_checked(runner, &command, &backend_dir)?;
        }
    }

    write_files(
        &backend_dir,
        &[("main.go", main_template(options))],
        store,
        liquid_object,
    )?;

    if options.run_installers {
        info!("Backend initialized and dependencies installed successfully!");
    } else {
        info!("Backend files written, dependencies were not installed.");
    }
    Ok(())
}
