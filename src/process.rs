//! Running the external toolchains (`go`, `npm`, `npx`).
//!
//! Every command blocks until the child exits. There is no timeout: a hung
//! installer hangs the scaffold.

use std::fmt::Display;
use std::path::Path;
use std::process::{Command, Stdio};

use console::style;
use log::{debug, info};
use thiserror::Error;

/// A program and its arguments, run without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for ShellCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit code and captured output of a finished command.
///
/// `code` is `None` when the child was killed by a signal. `output` is only
/// filled by runners that capture the child's output; `SystemRunner` leaves
/// it empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    pub code: Option<i32>,
    pub output: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to start `{command}`, is `{program}` installed and on PATH?")]
    Spawn {
        command: String,
        program: String,
        source: std::io::Error,
    },
    #[error("`{command}` exited with {}", .code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    Failed { command: String, code: Option<i32> },
}

pub trait CommandRunner {
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutcome, CommandError>;
}

/// Run a command and turn a non-zero exit into an error
pub fn run_checked(
    runner: &mut dyn CommandRunner,
    command: &ShellCommand,
    cwd: &Path,
) -> Result<CommandOutcome, CommandError> {
    info!("🔧 {}", style(format!("Running `{command}` ...")).bold().yellow());
    debug!("working directory: {}", cwd.display());
    let outcome = runner.run(command, cwd)?;
    // empty unless the runner captures output
    if !outcome.output.is_empty() {
        debug!("{}", outcome.output);
    }
    if !outcome.success() {
        return Err(CommandError::Failed {
            command: command.to_string(),
            code: outcome.code,
        });
    }
    Ok(outcome)
}

/// Runs the real program with stdio inherited, so its output streams
/// straight to the operator and `output` stays empty.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    #[cfg(windows)]
    fn command(program: &str) -> Command {
        // npm and npx are batch scripts on windows
        let mut command = Command::new("cmd");
        command.arg("/C").arg(program);
        command
    }

    #[cfg(not(windows))]
    fn command(program: &str) -> Command {
        Command::new(program)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutcome, CommandError> {
        let status = Self::command(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                program: command.program.clone(),
                source,
            })?;

        Ok(CommandOutcome {
            code: status.code(),
            output: String::new(),
        })
    }
}

/// Records every command and answers with canned exit codes
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeRunner {
    pub calls: Vec<(String, std::path::PathBuf)>,
    failing: Option<(String, i32)>,
}

#[cfg(test)]
impl FakeRunner {
    /// Make the first command whose rendering starts with `prefix` exit with `code`
    pub fn failing_on(prefix: &str, code: i32) -> Self {
        Self {
            calls: Vec::new(),
            failing: Some((prefix.to_string(), code)),
        }
    }

    pub fn commands(&self) -> Vec<&str> {
        self.calls.iter().map(|(c, _)| c.as_str()).collect()
    }
}

#[cfg(test)]
impl CommandRunner for FakeRunner {
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutcome, CommandError> {
        let rendered = command.to_string();
        self.calls.push((rendered.clone(), cwd.to_path_buf()));
        let code = match &self.failing {
            Some((prefix, code)) if rendered.starts_with(prefix.as_str()) => *code,
            _ => 0,
        };
        Ok(CommandOutcome {
            code: Some(code),
            output: format!("ran {rendered}"),
        })
    }
}
