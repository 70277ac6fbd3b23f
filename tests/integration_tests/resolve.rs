use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use insta_cmd::assert_cmd_snapshot;
use rstest::rstest;
use serde_json::Value;

use crate::common::{MEDIA_DIR, TestEnv, stderr, stdout};

fn resolve_json(env: &TestEnv, args: &[&str]) -> Value {
    let mut argv = vec!["resolve", "--format", "json"];
    argv.extend_from_slice(args);
    let output = env.run(&argv);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

fn media(env: &TestEnv, asset: &str) -> String {
    env.install_root()
        .join(MEDIA_DIR)
        .join(asset)
        .display()
        .to_string()
}

#[test]
fn test_bash_login_plan() {
    let env = TestEnv::new();
    let plan = resolve_json(&env, &["/usr/bin/bash", "-l"]);

    assert_eq!(
        plan["newArgs"],
        serde_json::json!(["--init-file", media(&env, "shellIntegration-bash.sh")])
    );
    assert_eq!(plan["envMixin"]["VSCODE_INJECTION"], "1");
    assert_eq!(plan["envMixin"]["VSCODE_SHELL_LOGIN"], "1");
    assert!(plan.get("filesToCopy").is_none());
}

#[test]
fn test_pwsh_plan_dot_sources_script() {
    let env = TestEnv::new();
    let plan = resolve_json(&env, &["pwsh", "-NoLogo"]);

    let expected_command = format!(". \"{}\"", media(&env, "shellIntegration.ps1"));
    assert_eq!(
        plan["newArgs"],
        serde_json::json!(["-noexit", "-command", expected_command])
    );
    assert_eq!(plan["envMixin"]["VSCODE_INJECTION"], "1");
}

#[test]
fn test_zsh_plan_redirects_zdotdir() {
    let env = TestEnv::new();
    let plan = resolve_json(&env, &["zsh"]);

    assert_eq!(plan["newArgs"], serde_json::json!(["-i"]));
    let zdotdir = plan["envMixin"]["ZDOTDIR"].as_str().unwrap();
    assert!(zdotdir.starts_with(&env.tmp_path().display().to_string()));
    assert!(zdotdir.ends_with("-vscode-zsh"));
    assert_eq!(
        plan["envMixin"]["USER_ZDOTDIR"],
        env.home_path().display().to_string()
    );

    let files = plan["filesToCopy"].as_array().unwrap();
    assert_eq!(files.len(), 4);
    assert_eq!(files[0]["source"], media(&env, "shellIntegration-rc.zsh"));
    assert_eq!(files[0]["dest"], format!("{zdotdir}/.zshrc"));
}

#[test]
fn test_zsh_inherits_user_zdotdir() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["resolve", "--format", "json", "zsh", "-l"])
        .env("ZDOTDIR", "/home/tester/.zsh")
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan["newArgs"], serde_json::json!(["-il"]));
    assert_eq!(plan["envMixin"]["USER_ZDOTDIR"], "/home/tester/.zsh");
}

#[rstest]
#[case::unsupported_shell(&["fish"])]
#[case::unknown_arg(&["bash", "--norc"])]
#[case::pwsh_command(&["pwsh", "-c", "ls"])]
#[case::feature_terminal(&["--feature-terminal", "bash"])]
#[case::disabled(&["--disabled", "bash"])]
fn test_not_injected_is_null(#[case] args: &[&str]) {
    let env = TestEnv::new();
    assert_eq!(resolve_json(&env, args), Value::Null);
}

#[test]
fn test_text_output_lists_plan() {
    let env = TestEnv::new();
    env.snapshot_settings().bind(|| {
        let mut cmd = env.command();
        cmd.args(["resolve", "bash", "-l"]);
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        args
          --init-file
          [TEMP]/install/out/vs/workbench/contrib/terminal/browser/media/shellIntegration-bash.sh
        env
          VSCODE_INJECTION=1
          VSCODE_SHELL_LOGIN=1

        ----- stderr -----
        ");
    });
}

#[test]
fn test_text_output_no_injection() {
    let env = TestEnv::new();
    let output = env.run(&["resolve", "sh"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "no injection\n");
}

#[test]
fn test_explain_reports_reason() {
    let env = TestEnv::new();
    let output = env.run(&["resolve", "--explain", "fish"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("\"fish\" is not a supported shell"));
}

#[test]
fn test_unrecognized_args_warn() {
    let env = TestEnv::new();
    let output = env.run(&["resolve", "bash", "--norc"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Shell integration cannot be enabled"));
}

#[test]
fn test_args_string_empty_bash_is_injected() {
    let env = TestEnv::new();
    let plan = resolve_json(&env, &["--args-string", "", "bash"]);
    assert_eq!(plan["newArgs"][0], "--init-file");
}

#[test]
fn test_install_root_flag_wins() {
    let env = TestEnv::new();
    let plan = resolve_json(&env, &["--install-root", "/srv/app", "bash"]);
    assert_eq!(
        plan["newArgs"][1],
        format!("/srv/app/{MEDIA_DIR}/shellIntegration-bash.sh")
    );
}

#[rstest]
#[case::bash("bash")]
#[case::pwsh("pwsh")]
#[case::zsh("zsh")]
fn test_non_utf8_environment_is_skipped(#[case] shell: &str) {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["resolve", "--format", "json", shell])
        .env("NON_UTF8_VALUE", OsStr::from_bytes(b"\xff\xfe"))
        .env(OsStr::from_bytes(b"JUNK_\xff"), "value")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let plan: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan["envMixin"]["VSCODE_INJECTION"], "1");
}
