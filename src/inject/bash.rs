//! Bash: replace the arguments with `--init-file <bundled script>`.
//!
//! `--init-file` and `-l` cannot be combined (bash ignores the init file for
//! login shells), so a login request travels through the environment instead
//! and the script sources the login profiles itself.

use super::assets::{BASH_SCRIPT, asset_path};
use super::host::HostContext;
use super::{InjectionPlan, SHELL_LOGIN_ENV_VAR, base_env_mixin};
use crate::shell::RecognizedFlags;

pub(super) fn plan(flags: RecognizedFlags, host: &HostContext) -> InjectionPlan {
    let mut env_mixin = base_env_mixin();
    if flags.has_login {
        env_mixin.insert(SHELL_LOGIN_ENV_VAR.to_string(), "1".to_string());
    }

    InjectionPlan {
        new_args: vec![
            "--init-file".to_string(),
            asset_path(host, BASH_SCRIPT).display().to_string(),
        ],
        env_mixin,
        files_to_copy: None,
    }
}
