//! Launching external programs: PATH resolution, spawn, synchronous wait.

use crate::command::ExitCode;
use crate::env::Environment;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Failure modes when launching a child process.
///
/// Only [`LaunchError::ProcessCreation`] is fatal to the shell; the other
/// variants are scoped to the child that never ran.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The program was not found, neither as a path nor on `PATH`.
    #[error("{0}: command not found")]
    NotFound(String),

    /// The program exists but could not be executed (e.g. no execute
    /// permission).
    #[error("{program}: cannot execute: {source}")]
    NotExecutable {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Creating the child process itself failed, e.g. due to resource
    /// exhaustion. The shell cannot guarantee correct operation after this.
    #[error("failed to create a process for {program}: {source}")]
    ProcessCreation {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, LaunchError::ProcessCreation { .. })
    }
}

/// A program invocation to be run as a child process.
///
/// The child inherits the shell's standard streams (so editors and pagers
/// get the controlling terminal), environment variables and working
/// directory. [`ExternalCommand::run`] blocks until the child exits.
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Spawn the program and wait for it to finish.
    ///
    /// Returns the child's exit code; a child killed by a signal reports
    /// `128 + signo` following shell conventions.
    pub fn run(&self, env: &Environment) -> Result<ExitCode, LaunchError> {
        let search_paths = env.get_var("PATH").unwrap_or_default();
        let resolved = find_command_path(OsStr::new(&search_paths), Path::new(&self.program))
            .ok_or_else(|| LaunchError::NotFound(self.program.clone()))?;

        let status = Command::new(resolved.as_ref())
            .args(&self.args)
            .envs(env.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&env.current_dir)
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    LaunchError::NotExecutable {
                        program: self.program.clone(),
                        source,
                    }
                }
                _ => LaunchError::ProcessCreation {
                    program: self.program.clone(),
                    source,
                },
            })?;

        match status.code() {
            Some(code) => Ok(code),
            None => Ok(terminated_by_signal(status)),
        }
    }
}

/// Resolve a program name the way execvp(3) would.
///
/// A name containing a path separator (absolute, `./foo`, `bin/foo`) is
/// used as-is and only checked for existence. A bare name is searched
/// through the entries of `search_paths` in order; the first match wins.
pub fn find_command_path<'a>(search_paths: &OsStr, program: &'a Path) -> Option<Cow<'a, Path>> {
    if program.as_os_str().is_empty() {
        return None;
    }

    if program.is_absolute() || program.components().count() > 1 {
        return program.exists().then_some(Cow::Borrowed(program));
    }

    let name = program.as_os_str();
    for dir in std::env::split_paths(search_paths) {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(Cow::Owned(candidate));
        }
    }
    None
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match ExitStatusExt::signal(&exit_status) {
        Some(signal) => 128 + signal,
        None => -1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs::File;

    fn env_with_path(path: &str) -> Environment {
        let mut vars = HashMap::new();
        vars.insert("PATH".to_string(), path.to_string());
        Environment {
            vars,
            current_dir: std::env::temp_dir(),
        }
    }

    #[test]
    #[cfg(unix)]
    fn absolute_path_is_used_as_is() {
        let path = Path::new("/bin/sh");
        let found = find_command_path(OsStr::new("/nonexistent"), path).unwrap();
        assert_eq!(found.as_ref(), path);
    }

    #[test]
    fn absolute_path_to_missing_file_is_not_found() {
        let res = find_command_path(OsStr::new("/bin"), Path::new("/bin/no-such-file"));
        assert!(res.is_none());
    }

    #[test]
    fn bare_name_is_searched_through_path_entries() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("mytool")).unwrap();
        let search = std::env::join_paths([Path::new("/nonexistent"), dir.path()]).unwrap();

        let found = find_command_path(&search, Path::new("mytool")).unwrap();
        assert_eq!(found.as_ref(), dir.path().join("mytool"));
    }

    #[test]
    fn bare_name_missing_everywhere_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let res = find_command_path(dir.path().as_os_str(), Path::new("mytool"));
        assert!(res.is_none());
    }

    #[test]
    fn relative_name_with_separator_bypasses_path_search() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        File::create(dir.path().join("bin").join("tool")).unwrap();

        let inside = dir.path().join("bin").join("tool");
        let found = find_command_path(OsStr::new("/nonexistent"), &inside).unwrap();
        assert_eq!(found.as_ref(), inside);
    }

    #[test]
    fn empty_program_name_is_not_found() {
        assert!(find_command_path(OsStr::new("/bin"), Path::new("")).is_none());
    }

    #[test]
    fn launching_a_missing_program_is_a_not_found_error() {
        let env = env_with_path("/nonexistent");
        let cmd = ExternalCommand::new("no-such-program", Vec::new());
        let err = cmd.run(&env).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    #[cfg(unix)]
    fn child_exit_code_is_reported() {
        let env = env_with_path("/bin:/usr/bin");
        let cmd = ExternalCommand::new("/bin/sh", vec!["-c".to_string(), "exit 7".to_string()]);
        assert_eq!(cmd.run(&env).unwrap(), 7);
    }

    #[test]
    #[cfg(unix)]
    fn successful_child_reports_zero() {
        let env = env_with_path("/bin:/usr/bin");
        let cmd = ExternalCommand::new("/bin/sh", vec!["-c".to_string(), "true".to_string()]);
        assert_eq!(cmd.run(&env).unwrap(), 0);
    }
}
