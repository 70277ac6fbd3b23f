//! Shell integration launch resolution.
//!
//! Given the shell a terminal host is about to spawn, decide whether shell
//! integration can be injected and, if so, how the launch must change: the
//! replacement arguments, the environment to overlay, and (for zsh) the files
//! to stage first. Launches that cannot be injected safely run unchanged.
//!
//! The resolver itself performs no I/O. [`HostContext::detect`] gathers host
//! facts once; [`stage::stage_files`] performs the copies a plan declares.
//!
//! ```
//! use shellinject::{
//!     HostContext, IntegrationPolicy, LaunchRequest, NullLogger, Platform,
//!     resolve_shell_integration_injection,
//! };
//!
//! let host = HostContext {
//!     install_root: "/opt/app".into(),
//!     temp_dir: "/tmp".into(),
//!     username: "alex".into(),
//!     home_dir: "/home/alex".into(),
//!     platform: Platform::Posix,
//! };
//! let request = LaunchRequest::new("/bin/bash", ["-l"]);
//! let plan = resolve_shell_integration_injection(
//!     &request,
//!     IntegrationPolicy { enabled: true },
//!     None,
//!     &host,
//!     &NullLogger,
//! )
//! .unwrap();
//! assert_eq!(plan.new_args[0], "--init-file");
//! assert_eq!(plan.env_mixin["VSCODE_SHELL_LOGIN"], "1");
//! ```

pub mod config;
pub mod inject;
pub mod logger;
pub mod path;
pub mod shell;
pub mod stage;

pub use inject::{
    Environment, FileCopy, HostContext, InjectionPlan, IntegrationPolicy, LaunchRequest, Platform,
    Rejection, resolve_shell_integration_injection, resolve_with_reason,
};
pub use logger::{LogLogger, Logger, NullLogger};
pub use shell::{Shell, ShellArgs};
