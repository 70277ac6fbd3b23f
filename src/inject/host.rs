//! Facts about the invoking host that the resolver reads but never changes.
//!
//! Gathering them up front keeps resolution free of I/O: tests build a
//! [`HostContext`] by hand, the CLI calls [`HostContext::detect`].

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::path::home_dir;

/// Path flavour used when building asset paths and the PowerShell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    pub fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Join `components` onto `base` with this platform's separator.
    ///
    /// Joins textually rather than through `Path::join` so a Windows host
    /// description produces backslash paths on any build platform.
    pub fn join<'a>(self, base: &Path, components: impl IntoIterator<Item = &'a str>) -> PathBuf {
        let sep = self.separator();
        let mut joined = base.display().to_string();
        for component in components {
            if !joined.is_empty() && !joined.ends_with(['/', '\\']) {
                joined.push(sep);
            }
            joined.push_str(component);
        }
        PathBuf::from(joined)
    }
}

/// Host collaborators the resolver consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Base path under which the bundled integration scripts live.
    pub install_root: PathBuf,
    /// Platform temp root, parent of the per-user zsh dotfile directory.
    pub temp_dir: PathBuf,
    pub username: String,
    pub home_dir: PathBuf,
    pub platform: Platform,
}

impl HostContext {
    /// Read the current user's identity and the platform directories.
    pub fn detect(install_root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let home_dir = home_dir().context(
            "Cannot determine home directory. Set $HOME (Unix) or $USERPROFILE (Windows)",
        )?;
        let username = current_username().context(
            "Cannot determine current username. Set $USER (Unix) or $USERNAME (Windows)",
        )?;

        Ok(Self {
            install_root: install_root.into(),
            temp_dir: std::env::temp_dir(),
            username,
            home_dir,
            platform: Platform::current(),
        })
    }
}

/// Name of the user running this process.
///
/// On Unix the user database wins over `$USER`, which a parent process may
/// have rewritten (e.g. under `sudo -E`).
fn current_username() -> Option<String> {
    #[cfg(unix)]
    {
        if let Ok(Some(user)) = nix::unistd::User::from_uid(nix::unistd::getuid()) {
            return Some(user.name);
        }
    }

    ["USER", "USERNAME"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
}
