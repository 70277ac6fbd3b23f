//! PowerShell: keep the session open after dot-sourcing the bundled script.

use super::assets::{PWSH_SCRIPT, asset_path};
use super::host::{HostContext, Platform};
use super::{InjectionPlan, base_env_mixin};
use crate::shell::{LOGIN_FLAG, RecognizedFlags};

pub(super) fn plan(flags: RecognizedFlags, host: &HostContext) -> InjectionPlan {
    let mut new_args = Vec::with_capacity(4);
    if flags.has_login {
        new_args.push(LOGIN_FLAG.to_string());
    }
    new_args.extend([
        "-noexit".to_string(),
        "-command".to_string(),
        activation_command(host),
    ]);

    InjectionPlan {
        new_args,
        env_mixin: base_env_mixin(),
        files_to_copy: None,
    }
}

/// Dot-source the script, swallowing failures so a missing or broken script
/// never prevents the shell from starting.
fn activation_command(host: &HostContext) -> String {
    let dot_source = format!(". \"{}\"", asset_path(host, PWSH_SCRIPT).display());
    match host.platform {
        Platform::Windows => format!("try {{ {dot_source} }} catch {{}}"),
        Platform::Posix => dot_source,
    }
}
