//! Zsh: redirect `ZDOTDIR` to a per-user directory of staged dotfiles.
//!
//! Zsh has no single init-file switch, so the bundled scripts are staged as
//! `.zshrc`, `.zprofile`, `.zshenv` and `.zlogin` in an isolated directory.
//! `USER_ZDOTDIR` remembers where the user's real dotfiles live, letting the
//! staged files source them in turn.

use std::path::PathBuf;

use super::assets::{ZSH_DOTFILES, asset_path};
use super::host::HostContext;
use super::{Environment, FileCopy, InjectionPlan, base_env_mixin};
use crate::shell::RecognizedFlags;

pub const ZDOTDIR_ENV_VAR: &str = "ZDOTDIR";
pub const USER_ZDOTDIR_ENV_VAR: &str = "USER_ZDOTDIR";

pub(super) fn plan(
    flags: RecognizedFlags,
    environment: Option<&Environment>,
    host: &HostContext,
) -> InjectionPlan {
    let zdotdir = isolated_zdotdir(host);

    let files_to_copy = ZSH_DOTFILES
        .iter()
        .map(|(asset, dotfile)| FileCopy {
            source: asset_path(host, asset),
            dest: host.platform.join(&zdotdir, [*dotfile]),
        })
        .collect();

    let mut env_mixin = base_env_mixin();
    env_mixin.insert(ZDOTDIR_ENV_VAR.to_string(), zdotdir.display().to_string());
    env_mixin.insert(
        USER_ZDOTDIR_ENV_VAR.to_string(),
        user_zdotdir(environment, host),
    );

    // -i and -l combine into a single token
    let interactive = if flags.has_login { "-il" } else { "-i" };

    InjectionPlan {
        new_args: vec![interactive.to_string()],
        env_mixin,
        files_to_copy: Some(files_to_copy),
    }
}

/// Staging directory for the current user: `<temp>/<username>-vscode-zsh`.
///
/// Stable across launches so repeated staging overwrites the same files.
pub fn isolated_zdotdir(host: &HostContext) -> PathBuf {
    let dir_name = format!("{}-vscode-zsh", host.username);
    host.platform.join(&host.temp_dir, [dir_name.as_str()])
}

/// The user's own dotfile directory.
///
/// An inherited `USER_ZDOTDIR` wins over `ZDOTDIR`: when one injected shell
/// launches another, `ZDOTDIR` already points at the staging directory.
fn user_zdotdir(environment: Option<&Environment>, host: &HostContext) -> String {
    environment
        .and_then(|env| {
            env.get(USER_ZDOTDIR_ENV_VAR)
                .or_else(|| env.get(ZDOTDIR_ENV_VAR))
        })
        .cloned()
        .unwrap_or_else(|| host.home_dir.display().to_string())
}
