use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::warn;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::project::{check_project_name, resolve_project_name, DEFAULT_PROJECT_NAME};

pub const PROJECT_NAME_PROMPT: &str = "Enter your project name";

/// Source of operator answers
pub trait InputProvider {
    /// Ask a single question and return the raw, untrimmed answer.
    fn ask(&mut self, prompt: &str, default: &str) -> Result<String>;
}

/// Reads from the terminal, or from plain stdin when it is not attended
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputProvider for TerminalInput {
    fn ask(&mut self, prompt: &str, default: &str) -> Result<String> {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return Input::<String>::new()
                .with_prompt(prompt)
                .default(default.to_owned())
                .interact_text()
                .map_err(Into::<anyhow::Error>::into);
        }
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;
        let mut answer = String::new();
        // end of input reads as an empty answer
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}

/// Ask until a usable project name comes back
pub fn project_name(input: &mut dyn InputProvider) -> Result<String> {
    loop {
        let answer = input.ask(PROJECT_NAME_PROMPT, DEFAULT_PROJECT_NAME)?;
        let name = resolve_project_name(&answer);
        match check_project_name(&name) {
            Ok(()) => break Ok(name),
            Err(_) => warn!(
                "{} \"{}\" {}",
                style("Sorry,").bold().red(),
                style(&name).bold().yellow(),
                style("is not a valid project name, use letters, digits, `.`, `_` and `-`")
                    .bold()
                    .red()
            ),
        }
    }
}

/// Answers fed from a list, an exhausted list behaves like end of input
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl InputProvider for ScriptedInput {
    fn ask(&mut self, prompt: &str, _default: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
