//! Shell families and launch argument analysis.
//!
//! This module provides:
//! - Shell family classification from an executable path
//! - Normalization of the three launch argument representations
//! - The per-family flag vocabulary used to decide whether injection is safe

mod args;
mod flags;
mod utils;

pub use args::ShellArgs;
pub use flags::{LOGIN_FLAG, RecognizedFlags, UnrecognizedArg, match_flags};
pub use utils::{extract_filename_from_path, shell_from_executable};

/// Shell families that support integration injection.
///
/// Each family has its own startup-code mechanism:
/// - PowerShell: `-noexit -command` dot-sourcing the bundled `.ps1`
/// - Bash: `--init-file` pointing at the bundled script
/// - Zsh: a redirected `ZDOTDIR` holding staged dotfiles
///
/// Anything else is unsupported and represented as `None` by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Shell {
    #[strum(serialize = "pwsh")]
    PowerShell,
    Bash,
    Zsh,
}

impl Shell {
    /// Whether this family understands the PowerShell "no logo" flag.
    ///
    /// The flag is only tolerated here; bash and zsh treat it as unrecognized.
    pub fn accepts_nologo(self) -> bool {
        matches!(self, Self::PowerShell)
    }
}
