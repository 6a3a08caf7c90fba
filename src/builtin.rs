//! The built-in commands and their dispatch table.
//!
//! Each entry validates its argument count against the parsed command and
//! reports a usage line to standard error, taking no action, when too few
//! arguments are given. Argument tokens are passed through verbatim —
//! a filename or word starting with `-` is data, never an option. Most
//! built-ins delegate the actual work to a standard utility spawned as a
//! child process and waited for synchronously.

use crate::command::{BuiltinKind, ExitCode, ParsedCommand};
use crate::env::Environment;
use crate::external::ExternalCommand;
use anyhow::Result;
use std::io::Write;

/// Run one built-in against the dispatch table.
///
/// Arguments beyond the required count are ignored, as in traditional
/// shells. [`BuiltinKind::Quit`] never reaches this table; the read-eval
/// loop consumes it before dispatch.
pub(crate) fn dispatch(
    kind: BuiltinKind,
    cmd: &ParsedCommand,
    stdout: &mut dyn Write,
    env: &Environment,
) -> Result<ExitCode> {
    let args = cmd.args();
    match kind {
        BuiltinKind::Copy => match args {
            [source, dest, ..] => run_tool("cp", &[source.as_str(), dest.as_str()], env),
            _ => usage_error(kind),
        },
        BuiltinKind::Delete => match args {
            [file, ..] => run_tool("rm", &[file.as_str()], env),
            _ => usage_error(kind),
        },
        BuiltinKind::Echo => {
            writeln!(stdout, "{}", args.join(" "))?;
            Ok(0)
        }
        BuiltinKind::Help => {
            write!(stdout, "{MANUAL}")?;
            Ok(0)
        }
        BuiltinKind::List => {
            // pwd first, ls only after it has finished.
            run_tool("pwd", &[], env)?;
            run_tool("ls", &["-l"], env)
        }
        BuiltinKind::Make => match args {
            [file, ..] => run_tool("nano", &[file.as_str()], env),
            _ => usage_error(kind),
        },
        BuiltinKind::Print => match args {
            [file, ..] => run_tool("more", &[file.as_str()], env),
            _ => usage_error(kind),
        },
        BuiltinKind::Wipe => run_tool("clear", &[], env),
        BuiltinKind::Execute => match args {
            [program, rest @ ..] => {
                let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
                run_tool(program, &rest, env)
            }
            _ => usage_error(kind),
        },
        BuiltinKind::Quit => Ok(0),
    }
}

/// The usage line for each built-in, shown on an argument-count error.
fn usage(kind: BuiltinKind) -> &'static str {
    match kind {
        BuiltinKind::Copy => "C file1 file2",
        BuiltinKind::Delete => "D file",
        BuiltinKind::Echo => "E [text...]",
        BuiltinKind::Help => "H",
        BuiltinKind::List => "L",
        BuiltinKind::Make => "M file",
        BuiltinKind::Print => "P file",
        BuiltinKind::Wipe => "W",
        BuiltinKind::Execute => "X prog [args...]",
        BuiltinKind::Quit => "Q",
    }
}

fn usage_error(kind: BuiltinKind) -> Result<ExitCode> {
    eprintln!("usage: {}", usage(kind));
    Ok(2)
}

/// Spawn a helper utility and wait for it.
///
/// A missing or unrunnable binary is scoped to that child: it is reported
/// on standard error and the shell keeps running.
fn run_tool(program: &str, args: &[&str], env: &Environment) -> Result<ExitCode> {
    let command = ExternalCommand::new(program, args.iter().map(|s| s.to_string()).collect());
    match command.run(env) {
        Ok(code) => Ok(code),
        Err(err) if !err.is_fatal() => {
            eprintln!("mshell: {err}");
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

const MANUAL: &str = "\
--------------------- mshell manual ---------------------

Commands are single uppercase letters; words are separated
by spaces, tabs or commas.

  C file1 file2   copy file1 to file2 (created or overwritten)
  D file          delete the named file
  E [text...]     echo the text to the screen
  H               show this manual
  L               print the working directory and list its contents
  M file          open the file in the nano editor, creating it if needed
  P file          page through the file with more(1)
  W               clear the screen
  X prog [args]   run prog with the given arguments
  Q               quit the shell

Any other first word is run as an external program found on
PATH, e.g. `mkdir subdir` or `grep foo notes.txt`.
";
