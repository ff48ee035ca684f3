use std::io::Write;

use clap::Arg;
use clap::Command;

use super::*;

fn test_command() -> Command {
    return Command::new("folio-term")
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .help("Path to the configuration file")
                .num_args(1),
        )
        .arg(
            Arg::new("content-file")
                .long("content-file")
                .help("Path to a YAML content file")
                .num_args(1),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File logs are appended to")
                .num_args(1),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level")
                .num_args(1),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .help("Phosphor color theme")
                .value_parser(["green", "amber", "mono"])
                .num_args(1),
        );
}

#[test]
fn it_has_sane_defaults() {
    assert_eq!(Config::default(ConfigKey::Theme), "green");
    assert_eq!(Config::default(ConfigKey::LogLevel), "info");
    assert_eq!(Config::default(ConfigKey::LogFile), "folio.log");
    assert_eq!(Config::default(ConfigKey::ContentFile), "");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("folio/config.toml"));
}

#[test]
fn it_serializes_a_default_config_file() {
    let serialized = Config::serialize_default(test_command());

    assert!(serialized.contains("theme = \"green\""));
    assert!(serialized.contains("log-file = \"folio.log\""));
    assert!(serialized.contains("# content-file = \"\""));
    assert!(serialized.contains("[possible values: green, amber, mono]"));
    assert!(!serialized.contains("config-file ="));
}

// The config store is process-global, so everything that mutates it lives in
// one test.
#[tokio::test]
async fn it_layers_defaults_config_file_and_cli_flags() {
    let cmd = test_command();

    // Defaults only.
    let matches = cmd.clone().get_matches_from(vec!["folio-term"]);
    Config::load(cmd.clone(), vec![&matches]).await.unwrap();
    assert_eq!(Config::get(ConfigKey::Theme), "green");
    assert_eq!(Config::get(ConfigKey::LogLevel), "info");

    // Values from a config file override defaults.
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(b"theme = \"mono\"\nlog-level = \"debug\"\n")
        .unwrap();
    let config_path = config_file.path().to_str().unwrap().to_string();
    let matches = cmd
        .clone()
        .get_matches_from(vec!["folio-term", "--config-file", &config_path]);
    Config::load(cmd.clone(), vec![&matches]).await.unwrap();
    assert_eq!(Config::get(ConfigKey::Theme), "mono");
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");

    // CLI flags override the config file.
    let matches = cmd.clone().get_matches_from(vec![
        "folio-term",
        "--config-file",
        &config_path,
        "--theme",
        "amber",
    ]);
    Config::load(cmd.clone(), vec![&matches]).await.unwrap();
    assert_eq!(Config::get(ConfigKey::Theme), "amber");
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");

    // Values outside an argument's possible values are rejected.
    let mut bad_file = tempfile::NamedTempFile::new().unwrap();
    bad_file.write_all(b"theme = \"bogus\"\n").unwrap();
    let bad_path = bad_file.path().to_str().unwrap().to_string();
    let matches = cmd
        .clone()
        .get_matches_from(vec!["folio-term", "--config-file", &bad_path]);
    let err = Config::load(cmd, vec![&matches]).await.unwrap_err();
    assert!(err.to_string().contains("invalid value for key 'theme'"));

    // Direct set/get round-trips.
    Config::set(ConfigKey::ContentFile, "content.yaml");
    assert_eq!(Config::get(ConfigKey::ContentFile), "content.yaml");
}
