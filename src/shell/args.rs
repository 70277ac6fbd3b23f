//! Launch argument representations.

use serde::{Deserialize, Serialize};

use super::Shell;

/// Arguments as supplied by the caller describing a shell launch.
///
/// Hosts pass arguments in one of three shapes, and the shapes are not
/// interchangeable: a single string is one token and is never split on
/// whitespace. Deserializes untagged from `null`, a JSON string, or an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShellArgs {
    #[default]
    Unset,
    Single(String),
    List(Vec<String>),
}

impl ShellArgs {
    /// Build the canonical ordered token list analysed by the flag matcher.
    ///
    /// For bash an empty single string means "no arguments"; every other
    /// family keeps it as one (empty) token, which the matcher rejects.
    pub fn normalize(&self, shell: Shell) -> Vec<String> {
        match self {
            Self::Unset => Vec::new(),
            Self::Single(arg) if arg.is_empty() && shell == Shell::Bash => Vec::new(),
            Self::Single(arg) => vec![arg.clone()],
            Self::List(args) => args.clone(),
        }
    }
}

impl From<&str> for ShellArgs {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ShellArgs {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ShellArgs {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for ShellArgs {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ShellArgs {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}
