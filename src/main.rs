use std::path::PathBuf;
use std::process;

use anstream::{eprintln, println};
use anyhow::Context;
use clap::Parser;
use color_print::cformat;

use shellinject::config::{UserConfig, get_config_path, set_config_path};
use shellinject::path::format_path_for_display;
use shellinject::{
    Environment, HostContext, InjectionPlan, LogLogger, Rejection, resolve_with_reason, stage,
};

mod cli;

use cli::{Cli, Commands, ConfigCommand, LaunchArgs, OutputFormat};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Some(path) = cli.config {
        set_config_path(path);
    }

    if let Err(e) = run(cli.command) {
        eprintln!("{}", cformat!("<red,bold>error:</> {e:#}"));
        process::exit(1);
    }
}

/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Resolve { launch, format } => handle_resolve(&launch, format),
        Commands::Stage { launch } => handle_stage(&launch),
        Commands::Config {
            action: ConfigCommand::Path,
        } => handle_config_path(),
    }
}

/// Resolve a launch against the current host and configuration.
fn resolve(launch: &LaunchArgs) -> anyhow::Result<Result<InjectionPlan, Rejection>> {
    let config = UserConfig::load()?;
    let install_root = match launch.install_root.clone().or(config.install_root.clone()) {
        Some(root) => root,
        None => default_install_root()?,
    };
    log::debug!("Install root: {}", install_root.display());

    let host = HostContext::detect(install_root)?;
    let environment = inherited_environment();

    let mut policy = config.policy();
    if launch.disabled {
        policy.enabled = false;
    }

    Ok(resolve_with_reason(
        &launch.to_request(),
        policy,
        Some(&environment),
        &host,
        &LogLogger,
    ))
}

/// Process environment, skipping entries that aren't valid UTF-8.
fn inherited_environment() -> Environment {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Directory containing the running executable.
fn default_install_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("Executable path has no parent directory")
}

fn explain(launch: &LaunchArgs, rejection: &Rejection) {
    if launch.explain {
        eprintln!("{}", cformat!("<yellow>not injected:</> {rejection}"));
    }
}

fn handle_resolve(launch: &LaunchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let outcome = resolve(launch)?;
    if let Err(rejection) = &outcome {
        explain(launch, rejection);
    }
    let plan = outcome.ok();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
            println!("{json}");
        }
        OutputFormat::Text => match plan {
            Some(plan) => print_plan(&plan),
            None => println!("no injection"),
        },
    }
    Ok(())
}

fn print_plan(plan: &InjectionPlan) {
    println!("{}", cformat!("<green,bold>args</>"));
    for arg in &plan.new_args {
        println!("  {arg}");
    }

    println!("{}", cformat!("<green,bold>env</>"));
    for (key, value) in &plan.env_mixin {
        println!("{}", cformat!("  <cyan>{key}</>={value}"));
    }

    if !plan.files().is_empty() {
        println!("{}", cformat!("<green,bold>files</>"));
        for file in plan.files() {
            println!(
                "  {} -> {}",
                format_path_for_display(&file.source),
                format_path_for_display(&file.dest)
            );
        }
    }
}

fn handle_stage(launch: &LaunchArgs) -> anyhow::Result<()> {
    let plan = match resolve(launch)? {
        Ok(plan) => plan,
        Err(rejection) => {
            explain(launch, &rejection);
            println!("no injection, nothing to stage");
            return Ok(());
        }
    };

    let staged = stage::stage_files(plan.files())?;
    let noun = if staged == 1 { "file" } else { "files" };
    println!("{}", cformat!("<green>Staged {staged} {noun}</>"));
    Ok(())
}

fn handle_config_path() -> anyhow::Result<()> {
    let path = get_config_path().context("Cannot determine config directory")?;
    println!("{}", path.display());
    Ok(())
}
