//! The read-eval loop: prompt, read, tokenize, classify, dispatch.

use crate::builtin;
use crate::command::{BuiltinKind, ParsedCommand};
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::lexer;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

const PROMPT: &str = "mshell|> ";
const FAREWELL: &str = "mshell: terminating successfully";

/// Whether the read-eval loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The interactive shell.
///
/// One instance owns the environment snapshot handed to every child and
/// drives the loop: each cycle reads one line, executes it to completion
/// (waiting for any spawned child) and prompts again, until the quit
/// mnemonic `Q` or end of input.
///
/// Example
/// ```no_run
/// use mshell::Interpreter;
/// let mut shell = Interpreter::default();
/// shell.repl().unwrap();
/// ```
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Run the interactive loop until the user quits.
    ///
    /// Recoverable problems (usage errors, unknown programs, over-long
    /// lines) are reported and the loop continues; only a failed process
    /// creation is propagated as a fatal error.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    // Session-local recall only; nothing is written to disk.
                    rl.add_history_entry(line.as_str())?;
                    if self.execute_line(&line)? == LoopState::Terminated {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    // Unlike a clean `Q`, the prompt line has no newline yet.
                    println!();
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        println!("{FAREWELL}");
        Ok(())
    }

    /// Execute a single input line against the standard output stream.
    pub fn execute_line(&mut self, line: &str) -> Result<LoopState> {
        self.execute_line_with_output(line, &mut std::io::stdout())
    }

    /// Execute a single input line, sending direct built-in output
    /// (echo, help) to the provided writer.
    pub fn execute_line_with_output(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
    ) -> Result<LoopState> {
        let tokens = match lexer::split_into_tokens(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprintln!("mshell: {err}");
                return Ok(LoopState::Running);
            }
        };

        // A blank or delimiter-only line has no command name to dispatch.
        let Some(cmd) = ParsedCommand::from_tokens(tokens) else {
            return Ok(LoopState::Running);
        };

        match BuiltinKind::classify(&cmd.name) {
            Some(BuiltinKind::Quit) => return Ok(LoopState::Terminated),
            Some(kind) => {
                builtin::dispatch(kind, &cmd, stdout, &self.env)?;
            }
            None => {
                let external = ExternalCommand::new(&cmd.name, cmd.args().to_vec());
                match external.run(&self.env) {
                    // The exit code of a child is not inspected here; only
                    // launch failures matter to the loop.
                    Ok(_status) => {}
                    Err(err) if !err.is_fatal() => eprintln!("mshell: {err}"),
                    Err(err) => return Err(err.into()),
                }
            }
        }

        Ok(LoopState::Running)
    }
}

impl Default for Interpreter {
    /// An interpreter over a snapshot of the current process environment.
    fn default() -> Self {
        Self::new(Environment::new())
    }
}
