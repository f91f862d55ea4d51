//! Command-line flags, config loading and the `--dump` tree.

use serial_test::serial;
use std::io::Write;

use folio::cli::{parse_args, render_tree, run_cli_command, usage_text, CliCommand};
use folio::config::{Config, ENV_API_KEY, ENV_BACKEND_URL, ENV_CONFIG_PATH};
use folio::demo::sample_library;
use folio::loader::source_from_config;

fn parse(args: &[&str]) -> CliCommand {
    let mut all = vec!["folio".to_string()];
    all.extend(args.iter().map(|a| a.to_string()));
    parse_args(all.into_iter())
}

#[test]
fn test_flag_combinations() {
    assert_eq!(parse(&[]), CliCommand::RunTui { demo: false });
    assert_eq!(parse(&["--dump", "--demo"]), CliCommand::Dump { demo: true });
    assert_eq!(parse(&["--demo", "--help"]), CliCommand::Help);
    assert!(run_cli_command(&parse(&["-V"])).is_some());
}

#[test]
fn test_usage_lists_environment() {
    let usage = usage_text();
    assert!(usage.contains(ENV_BACKEND_URL));
    assert!(usage.contains(ENV_API_KEY));
    assert!(usage.contains("--dump"));
}

#[test]
fn test_dump_tree_for_sample_library() {
    let tree = render_tree(&sample_library());
    let lines: Vec<&str> = tree.lines().collect();
    assert_eq!(lines[0], "Jazz Ensemble/");
    assert!(lines[1].starts_with("  Blues Standards/ ("));
    assert!(tree.contains("  Mozart Symphony No. 40/ (0 Bytes)"));
}

#[test]
#[serial]
fn test_config_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"backend_url": "https://file.example.co/", "api_key": "from-file"}}"#
    )
    .unwrap();

    std::env::set_var(ENV_CONFIG_PATH, file.path());
    std::env::set_var(ENV_API_KEY, "from-env");
    std::env::remove_var(ENV_BACKEND_URL);

    let config = Config::load().unwrap();

    std::env::remove_var(ENV_CONFIG_PATH);
    std::env::remove_var(ENV_API_KEY);

    assert_eq!(config.backend_url.as_deref(), Some("https://file.example.co"));
    assert_eq!(config.api_key.as_deref(), Some("from-env"));
    assert!(config.validate().is_ok());

    let source = source_from_config(&config).unwrap();
    assert_eq!(source.describe(), "file.example.co");
}

#[test]
#[serial]
fn test_missing_config_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(ENV_CONFIG_PATH, dir.path().join("absent.json"));
    std::env::remove_var(ENV_BACKEND_URL);

    let config = Config::load();
    std::env::remove_var(ENV_CONFIG_PATH);

    let config = config.unwrap();
    assert!(config.backend_url.is_none());
    assert!(config.validate().is_err());
    assert!(config.with_demo_mode(true).validate().is_ok());
}
