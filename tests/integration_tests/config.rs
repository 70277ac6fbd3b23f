use crate::common::{MEDIA_DIR, TestEnv, stderr, stdout};

#[test]
fn test_config_path_uses_env_var() {
    let env = TestEnv::new();
    let output = env.run(&["config", "path"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", env.config_path().display()));
}

#[test]
fn test_config_flag_wins_over_env_var() {
    let env = TestEnv::new();
    let output = env.run(&["--config", "/etc/shellinject.toml", "config", "path"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/etc/shellinject.toml\n");
}

#[test]
fn test_config_disables_integration() {
    let env = TestEnv::new();
    env.write_config("enabled = false\n");

    let output = env.run(&["resolve", "--explain", "bash"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "no injection\n");
    assert!(stderr(&output).contains("shell integration is disabled"));
}

#[test]
fn test_enabled_env_var_overrides_config() {
    let env = TestEnv::new();
    env.write_config("enabled = false\n");

    let output = env
        .command()
        .args(["resolve", "bash"])
        .env("SHELLINJECT_ENABLED", "true")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("args\n"));
}

#[test]
fn test_config_install_root() {
    let env = TestEnv::new();
    env.write_config("install-root = \"/srv/app\"\n");

    let output = env
        .command()
        .args(["resolve", "--format", "json", "bash"])
        .env_remove("SHELLINJECT_INSTALL_ROOT")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains(&format!("/srv/app/{MEDIA_DIR}/shellIntegration-bash.sh")));
}

#[test]
fn test_invalid_config_is_an_error() {
    let env = TestEnv::new();
    env.write_config("enabled = \"sometimes\"\n");

    let output = env.run(&["resolve", "bash"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid config file"));
}

#[test]
fn test_invalid_enabled_env_var_is_an_error() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["resolve", "bash"])
        .env("SHELLINJECT_ENABLED", "maybe")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("SHELLINJECT_ENABLED must be true or false"));
}
