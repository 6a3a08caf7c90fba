//! The process environment seen by spawned children.

use std::collections::HashMap;
use std::env as stdenv;
use std::path::PathBuf;

/// A snapshot of the environment the shell was started in.
///
/// The shell itself never changes the working directory; both it and the
/// variables are captured once and handed to every spawned child.
#[derive(Debug, Clone)]
pub struct Environment {
    pub vars: HashMap<String, String>,
    pub current_dir: PathBuf,
}

impl Environment {
    /// Capture the current process environment.
    pub fn new() -> Self {
        let vars = stdenv::vars().collect();
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { vars, current_dir }
    }

    pub fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_environment_contains_process_vars() {
        let env = Environment::new();
        // PATH is set in any environment these tests run in.
        assert!(env.get_var("PATH").is_some());
    }

    #[test]
    fn set_var_overrides_the_snapshot() {
        let mut env = Environment::new();
        env.set_var("PATH", "/nowhere");
        assert_eq!(env.get_var("PATH").as_deref(), Some("/nowhere"));
    }
}
