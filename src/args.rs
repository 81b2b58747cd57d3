use std::path::PathBuf;

use clap::Parser;

use crate::config::Preset;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
    pub const STACK_PARAMETERS: &str = "Stack Parameters";
}

#[derive(Parser, Clone, Debug, Default)]
#[command(
    name = "stackforge",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Directory to create / project name; asked interactively when omitted
    #[arg(long, short, value_parser, help_heading = heading::OUTPUT_PARAMETERS)]
    pub name: Option<String>,

    /// Create the project below the given path instead of the current directory.
    #[arg(long, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Layout preset: `classic` adds shared/utils, `vite` adds a MongoDB ping, a fixed
    /// package.json and an index.html
    #[arg(long, short, value_enum, help_heading = heading::STACK_PARAMETERS)]
    pub preset: Option<Preset>,

    /// Read scaffold options from a TOML file
    #[arg(long, short, value_parser, value_name = "FILE", help_heading = heading::STACK_PARAMETERS)]
    pub config: Option<PathBuf>,

    /// Directory holding `<key>.liquid` files that replace the built-in templates
    #[arg(long, value_parser, value_name = "DIR", help_heading = heading::STACK_PARAMETERS)]
    pub templates: Option<PathBuf>,

    /// Only write files, do not run `go`, `npm` or `npx`.
    #[arg(long, action, help_heading = heading::STACK_PARAMETERS)]
    pub no_install: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
