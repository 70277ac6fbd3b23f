//! Locations of the bundled integration scripts.
//!
//! The scripts themselves are opaque: only their paths matter here.

use std::path::PathBuf;

use super::host::HostContext;

/// Directory holding the scripts, relative to the installation root.
const MEDIA_DIR: [&str; 7] = ["out", "vs", "workbench", "contrib", "terminal", "browser", "media"];

pub const PWSH_SCRIPT: &str = "shellIntegration.ps1";
pub const BASH_SCRIPT: &str = "shellIntegration-bash.sh";

/// Zsh assets and the dotfile each one is staged as, in copy order.
pub const ZSH_DOTFILES: [(&str, &str); 4] = [
    ("shellIntegration-rc.zsh", ".zshrc"),
    ("shellIntegration-profile.zsh", ".zprofile"),
    ("shellIntegration-env.zsh", ".zshenv"),
    ("shellIntegration-login.zsh", ".zlogin"),
];

/// Absolute path of a bundled asset for `host`.
pub fn asset_path(host: &HostContext, name: &str) -> PathBuf {
    host.platform.join(
        &host.install_root,
        MEDIA_DIR.into_iter().chain(std::iter::once(name)),
    )
}
