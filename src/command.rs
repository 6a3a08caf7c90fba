//! The data model for a single command line: the parsed command value and
//! the closed set of built-in commands.

/// Exit code of a command, following shell conventions: 0 for success.
pub type ExitCode = i32;

/// One parsed command line.
///
/// Constructed fresh for every loop iteration and discarded at the end of
/// it; the shell keeps no command history of its own. `arguments[0]` is
/// always the command name, so `arguments` holds `count() + 1` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command name, identical to the first token.
    pub name: String,
    /// All tokens of the line, including the name.
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    /// Build a command from the token sequence of one line.
    ///
    /// Returns `None` for an empty token sequence so a blank line can never
    /// be dispatched.
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        let name = tokens.first()?.clone();
        Some(Self {
            name,
            arguments: tokens,
        })
    }

    /// Number of arguments, excluding the command name.
    pub fn count(&self) -> usize {
        self.arguments.len() - 1
    }

    /// The arguments after the command name.
    pub fn args(&self) -> &[String] {
        &self.arguments[1..]
    }
}

/// The built-in commands known to the shell at compile time.
///
/// Each variant maps one-to-one from a single uppercase mnemonic token; the
/// set is closed and case-sensitive, so `c` is an external program while
/// `C` is the copy built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Copy,
    Delete,
    Echo,
    Help,
    List,
    Make,
    Print,
    Wipe,
    Execute,
    Quit,
}

impl BuiltinKind {
    /// Classify a command name: a known mnemonic maps to its built-in,
    /// anything else is an external program.
    pub fn classify(name: &str) -> Option<Self> {
        match name {
            "C" => Some(Self::Copy),
            "D" => Some(Self::Delete),
            "E" => Some(Self::Echo),
            "H" => Some(Self::Help),
            "L" => Some(Self::List),
            "M" => Some(Self::Make),
            "P" => Some(Self::Print),
            "W" => Some(Self::Wipe),
            "X" => Some(Self::Execute),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// The mnemonic token for this built-in.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Copy => "C",
            Self::Delete => "D",
            Self::Echo => "E",
            Self::Help => "H",
            Self::List => "L",
            Self::Make => "M",
            Self::Print => "P",
            Self::Wipe => "W",
            Self::Execute => "X",
            Self::Quit => "Q",
        }
    }
}
