//! Recognition of the few launch flags injection knows how to preserve.
//!
//! The matcher is fail-closed: any token outside a family's vocabulary makes
//! the whole argument list unrecognized, and the launch is left untouched.

use std::fmt;

use super::Shell;

/// Login flag shared by every family.
pub const LOGIN_FLAG: &str = "-l";

/// PowerShell's banner suppression flag. Any case-insensitive prefix of at
/// least [`NOLOGO_MIN_LEN`] characters is accepted (`-nol` .. `-nologo`).
const NOLOGO_FLAG: &str = "-nologo";
const NOLOGO_MIN_LEN: usize = 4;

/// Flags found in a launch argument list that was fully understood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecognizedFlags {
    pub has_login: bool,
    pub has_nologo: bool,
}

/// First token that is not part of the family's flag vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedArg(pub String);

impl fmt::Display for UnrecognizedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized shell argument {:?}", self.0)
    }
}

impl std::error::Error for UnrecognizedArg {}

/// Scan normalized `tokens` against the vocabulary of `shell`.
///
/// Stops at the first token that isn't a known flag.
pub fn match_flags(shell: Shell, tokens: &[String]) -> Result<RecognizedFlags, UnrecognizedArg> {
    let mut flags = RecognizedFlags::default();
    for token in tokens {
        if token == LOGIN_FLAG {
            flags.has_login = true;
        } else if shell.accepts_nologo() && is_nologo(token) {
            flags.has_nologo = true;
        } else {
            return Err(UnrecognizedArg(token.clone()));
        }
    }
    Ok(flags)
}

fn is_nologo(token: &str) -> bool {
    (NOLOGO_MIN_LEN..=NOLOGO_FLAG.len()).contains(&token.len())
        && NOLOGO_FLAG
            .get(..token.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(token))
}
