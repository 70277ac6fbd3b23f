//! Shell integration launch resolution.
//!
//! Given how a shell is about to be started, decide whether and how to change
//! that launch so the shell sources the bundled integration script:
//!
//! ```text
//! gate -> classify executable -> normalize args -> match flags -> family strategy
//! ```
//!
//! Every step can reject, and every rejection means the same thing to the
//! caller: spawn the shell exactly as originally requested. Nothing here
//! spawns processes, copies files, or mutates the environment. A returned
//! [`InjectionPlan`] only *declares* what the caller must do.

mod assets;
mod bash;
mod host;
mod pwsh;
mod zsh;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logger::Logger;
use crate::shell::{Shell, ShellArgs, UnrecognizedArg, match_flags, shell_from_executable};

pub use assets::{BASH_SCRIPT, PWSH_SCRIPT, ZSH_DOTFILES, asset_path};
pub use host::{HostContext, Platform};
pub use zsh::{USER_ZDOTDIR_ENV_VAR, ZDOTDIR_ENV_VAR, isolated_zdotdir};

/// Set to `1` in every injected shell so the script knows it was injected.
pub const INJECTION_ENV_VAR: &str = "VSCODE_INJECTION";

/// Set to `1` for bash when the original launch asked for a login shell.
pub const SHELL_LOGIN_ENV_VAR: &str = "VSCODE_SHELL_LOGIN";

/// Inherited environment variables, by name.
pub type Environment = HashMap<String, String>;

/// A shell about to be started. Read-only to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub executable: String,
    #[serde(default)]
    pub args: ShellArgs,
    /// Feature terminals run host-driven tasks and are never injected.
    #[serde(default)]
    pub is_feature_terminal: bool,
}

impl LaunchRequest {
    pub fn new(executable: impl Into<String>, args: impl Into<ShellArgs>) -> Self {
        Self {
            executable: executable.into(),
            args: args.into(),
            is_feature_terminal: false,
        }
    }
}

/// Whether shell integration is turned on at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationPolicy {
    pub enabled: bool,
}

/// A source -> destination copy the caller must perform before spawning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCopy {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// How to launch the shell with integration injected.
///
/// `new_args` replaces the original argument list verbatim; `env_mixin` is
/// overlaid onto the inherited environment; `files_to_copy`, when present,
/// must be staged in order before the shell is spawned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionPlan {
    pub new_args: Vec<String>,
    // BTreeMap for deterministic serialization order
    pub env_mixin: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_to_copy: Option<Vec<FileCopy>>,
}

impl InjectionPlan {
    /// Apply `env_mixin` onto `inherited`; mixin values win on collision.
    pub fn overlay_env(&self, inherited: &Environment) -> Environment {
        let mut env = inherited.clone();
        env.extend(
            self.env_mixin
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        env
    }

    /// Files to stage, or an empty slice when the family needs none.
    pub fn files(&self) -> &[FileCopy] {
        self.files_to_copy.as_deref().unwrap_or_default()
    }
}

/// Mixin shared by every family.
fn base_env_mixin() -> BTreeMap<String, String> {
    BTreeMap::from([(INJECTION_ENV_VAR.to_string(), "1".to_string())])
}

/// Why a launch was left untouched.
///
/// The public resolver collapses all of these to `None`; they exist for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Disabled,
    FeatureTerminal,
    NoExecutable,
    UnsupportedShell { executable: String },
    UnrecognizedArgs { shell: Shell, arg: UnrecognizedArg },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Disabled => write!(f, "shell integration is disabled"),
            Rejection::FeatureTerminal => write!(f, "feature terminals are never injected"),
            Rejection::NoExecutable => write!(f, "no executable was given"),
            Rejection::UnsupportedShell { executable } => {
                write!(f, "{executable:?} is not a supported shell")
            }
            Rejection::UnrecognizedArgs { shell, arg } => write!(f, "{shell}: {arg}"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Decide whether and how to inject shell integration into a launch.
///
/// Returns `None` when the launch should proceed unmodified. Identical inputs
/// always produce identical results; `logger` only ever receives warnings and
/// never influences the outcome.
pub fn resolve_shell_integration_injection(
    request: &LaunchRequest,
    policy: IntegrationPolicy,
    environment: Option<&Environment>,
    host: &HostContext,
    logger: &dyn Logger,
) -> Option<InjectionPlan> {
    match resolve_with_reason(request, policy, environment, host, logger) {
        Ok(plan) => Some(plan),
        Err(rejection) => {
            log::debug!("No shell integration for {:?}: {rejection}", request.executable);
            None
        }
    }
}

/// Same as [`resolve_shell_integration_injection`] but reports why nothing
/// was injected.
pub fn resolve_with_reason(
    request: &LaunchRequest,
    policy: IntegrationPolicy,
    environment: Option<&Environment>,
    host: &HostContext,
    logger: &dyn Logger,
) -> Result<InjectionPlan, Rejection> {
    if !policy.enabled {
        return Err(Rejection::Disabled);
    }
    if request.is_feature_terminal {
        return Err(Rejection::FeatureTerminal);
    }
    if request.executable.is_empty() {
        return Err(Rejection::NoExecutable);
    }

    let Some(shell) = shell_from_executable(&request.executable) else {
        return Err(Rejection::UnsupportedShell {
            executable: request.executable.clone(),
        });
    };

    let tokens = request.args.normalize(shell);
    let flags = match_flags(shell, &tokens).map_err(|arg| {
        logger.warn(&format!(
            "Shell integration cannot be enabled for executable {:?} and args {:?}",
            request.executable, tokens
        ));
        Rejection::UnrecognizedArgs { shell, arg }
    })?;

    // The no-logo flag is dropped: every injected command line already
    // suppresses the banner.
    let plan = match shell {
        Shell::PowerShell => pwsh::plan(flags, host),
        Shell::Bash => bash::plan(flags, host),
        Shell::Zsh => zsh::plan(flags, environment, host),
    };
    Ok(plan)
}
