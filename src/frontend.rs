use anyhow::Result;
use liquid_core::Object;
use log::info;

use crate::config::ScaffoldOptions;
use crate::process::{run_checked, CommandRunner, ShellCommand};
use crate::project::ProjectDescriptor;
use crate::template::{write_files, TemplateKey, TemplateStore};

pub const NPM_PACKAGES: [&str; 4] = ["react", "react-dom", "vite", "tailwindcss"];

pub fn install_commands() -> Vec<ShellCommand> {
    vec![
        ShellCommand::new("npm", ["init", "-y"]),
        ShellCommand::new("npm", ["install"].into_iter().chain(NPM_PACKAGES)),
    ]
}

pub fn tailwind_init_command() -> ShellCommand {
    ShellCommand::new("npx", ["tailwindcss", "init"])
}

/// Source files of the frontend, relative to its directory
pub fn source_files(options: &ScaffoldOptions) -> Vec<(&'static str, TemplateKey)> {
    let mut files = vec![
        ("src/App.jsx", TemplateKey::FrontendAppComponent),
        ("src/index.css", TemplateKey::FrontendStylesheet),
        ("src/main.jsx", TemplateKey::FrontendBootstrap),
        ("tailwind.config.js", TemplateKey::FrontendTailwindConfig),
    ];
    if options.include_index_html {
        files.push(("index.html", TemplateKey::FrontendIndexHtml));
    }
    files
}

/// Install the npm packages, set up tailwind and write the React sources
pub fn init_frontend(
    project: &ProjectDescriptor,
    options: &ScaffoldOptions,
    runner: &mut dyn CommandRunner,
    store: &TemplateStore,
    liquid_object: &Object,
) -> Result<()> {
    info!("Initializing frontend...");
    let frontend_dir = project.frontend_dir();

    if options.run_installers {
        for command in install_commands() {
            run_checked(runner, &command, &frontend_dir)?;
        }
    }

    if options.overwrite_frontend_manifest {
        write_files(
            &frontend_dir,
            &[("package.json", TemplateKey::FrontendManifest)],
            store,
            liquid_object,
        )?;
    }

    if options.run_installers {
        run_checked(runner, &tailwind_init_command(), &frontend_dir)?;
    }

    // tailwind.config.js from `npx tailwindcss init` gets replaced here
    write_files(&frontend_dir, &source_files(options), store, liquid_object)?;

    info!("Frontend initialized successfully!");
    Ok(())
}
