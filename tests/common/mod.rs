#![allow(dead_code)]

//! # Test Utilities for shellinject
//!
//! [`TestEnv`] gives each test an isolated install root holding fake
//! integration scripts, its own temp and home directories, and a config file
//! path that starts out missing. Commands built from it never read the
//! invoking user's configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

pub const MEDIA_DIR: &str = "out/vs/workbench/contrib/terminal/browser/media";

pub const ASSETS: [&str; 6] = [
    "shellIntegration.ps1",
    "shellIntegration-bash.sh",
    "shellIntegration-rc.zsh",
    "shellIntegration-profile.zsh",
    "shellIntegration-env.zsh",
    "shellIntegration-login.zsh",
];

pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let env = Self { temp_dir };

        let media = env.media_dir();
        fs::create_dir_all(&media).unwrap();
        for asset in ASSETS {
            fs::write(media.join(asset), format!("# {asset}\n")).unwrap();
        }
        fs::create_dir_all(env.tmp_path()).unwrap();
        fs::create_dir_all(env.home_path()).unwrap();
        env
    }

    pub fn install_root(&self) -> PathBuf {
        self.temp_dir.path().join("install")
    }

    pub fn media_dir(&self) -> PathBuf {
        self.install_root().join(MEDIA_DIR)
    }

    pub fn tmp_path(&self) -> PathBuf {
        self.temp_dir.path().join("tmp")
    }

    pub fn home_path(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }

    /// Snapshot settings replacing this env's temp root with `[TEMP]`.
    pub fn snapshot_settings(&self) -> Settings {
        let mut settings = Settings::clone_current();
        let root = self.temp_dir.path().display().to_string();
        settings.add_filter(&regex::escape(&root), "[TEMP]");
        settings
    }

    /// A `shellinject` command isolated to this environment.
    ///
    /// The install root comes from `SHELLINJECT_INSTALL_ROOT`, so tests can
    /// still override it with `--install-root` or the config file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("shellinject"));
        for (key, _) in std::env::vars() {
            if key.starts_with("SHELLINJECT_") || key == "ZDOTDIR" || key == "USER_ZDOTDIR" {
                cmd.env_remove(&key);
            }
        }
        cmd.env("SHELLINJECT_CONFIG_PATH", self.config_path());
        cmd.env("SHELLINJECT_INSTALL_ROOT", self.install_root());
        cmd.env("TMPDIR", self.tmp_path());
        cmd.env("HOME", self.home_path());
        cmd.env("USER", "tester");
        cmd.env("RUST_LOG", "warn");
        cmd.env_remove("CLICOLOR_FORCE");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    /// The per-user zsh staging directory created under this env's temp dir.
    pub fn staged_zdotdir(&self) -> Option<PathBuf> {
        fs::read_dir(self.tmp_path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .find(|path| path.to_string_lossy().ends_with("-vscode-zsh"))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
