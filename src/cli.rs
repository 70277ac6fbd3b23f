use clap::builder::styling::{AnsiColor, Color, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use shellinject::shell::ShellArgs;
use shellinject::LaunchRequest;

/// Custom styles for help output
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}

#[derive(Parser)]
#[command(name = "shellinject")]
#[command(about = "Resolve how to launch a shell with integration injected", long_about = None)]
#[command(version)]
#[command(styles = help_styles())]
pub struct Cli {
    /// Verbose output (-v: debug logs, -vv: trace logs)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// User config file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the launch plan for a shell
    ///
    /// Shows the arguments, environment overlay and files to stage that make
    /// the shell source its integration script. Prints "no injection" when the
    /// launch should run unchanged.
    Resolve {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Resolve a launch and stage the files it declares
    ///
    /// Only zsh launches declare files. Nothing is staged when the launch is
    /// not injected.
    Stage {
        #[command(flatten)]
        launch: LaunchArgs,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the user config file path
    Path,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Description of the shell launch to resolve.
#[derive(Args)]
pub struct LaunchArgs {
    /// Shell executable (name or path)
    pub executable: String,

    /// Shell arguments, each one token (use `--` before arguments starting with `-v`)
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        conflicts_with = "args_string"
    )]
    pub args: Vec<String>,

    /// Pass arguments as a single unsplit string instead of a list
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub args_string: Option<String>,

    /// Launch is a feature terminal (never injected)
    #[arg(long)]
    pub feature_terminal: bool,

    /// Treat shell integration as disabled regardless of config
    #[arg(long)]
    pub disabled: bool,

    /// Base path of the bundled scripts (overrides config)
    #[arg(long, value_name = "PATH")]
    pub install_root: Option<PathBuf>,

    /// Explain on stderr why a launch is not injected
    #[arg(long)]
    pub explain: bool,
}

impl LaunchArgs {
    pub fn to_request(&self) -> LaunchRequest {
        let args = match (&self.args_string, self.args.is_empty()) {
            (Some(single), _) => ShellArgs::Single(single.clone()),
            (None, true) => ShellArgs::Unset,
            (None, false) => ShellArgs::List(self.args.clone()),
        };
        LaunchRequest {
            executable: self.executable.clone(),
            args,
            is_feature_terminal: self.feature_terminal,
        }
    }
}
