use anyhow::Result;
use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn build() -> Command {
    return Command::new("folio-term")
        .about("Personal portfolio rendered as a terminal interface")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to the configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::ContentFile.to_string())
                .long(ConfigKey::ContentFile.to_string())
                .help("Path to a YAML content file overriding the built-in portfolio content")
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::LogFile.to_string())
                .long(ConfigKey::LogFile.to_string())
                .help(format!(
                    "File logs are appended to, keeping the interface clean [default: {}]",
                    Config::default(ConfigKey::LogFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::LogLevel.to_string())
                .long(ConfigKey::LogLevel.to_string())
                .help(format!(
                    "Log level [default: {}]",
                    Config::default(ConfigKey::LogLevel)
                ))
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::Theme.to_string())
                .long(ConfigKey::Theme.to_string())
                .help(format!(
                    "Phosphor color theme [default: {}]",
                    Config::default(ConfigKey::Theme)
                ))
                .value_parser(["green", "amber", "mono"])
                .num_args(1),
        )
        .subcommand(Command::new("config").about("Print the default configuration file to stdout"));
}

/// Parse the command line and populate the global config. Returns false when
/// a subcommand already handled the invocation and the UI should not start.
pub async fn parse() -> Result<bool> {
    let cmd = build();
    let matches = cmd.clone().get_matches();

    if matches.subcommand_matches("config").is_some() {
        println!("{}", Config::serialize_default(cmd));
        return Ok(false);
    }

    Config::load(cmd, vec![&matches]).await?;

    return Ok(true);
}
