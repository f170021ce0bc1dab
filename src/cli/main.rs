// SPDX-License-Identifier: Apache-2.0

mod error;

use std::path::Path;

use netplanner::{
    ConfigLoader, NetplannerConfig, NetworkdProvider, SriovManager,
};

pub(crate) use self::error::CliError;

const DEFAULT_OUTPUT_PATH: &str = "/etc/systemd/network";
const NETPLAN_DEFAULT_OUTPUT_PATH: &str = "/run/systemd/network";

fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("netplanner")
        .about("Declarative network configuration for systemd-networkd")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .arg(
            clap::Arg::new("debug")
                .long("debug")
                .action(clap::ArgAction::SetTrue)
                .help("Enable debug logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("config")
                .long("config")
                .help("Path to the configuration file or directory"),
        )
        .arg(
            clap::Arg::new("output")
                .long("output")
                .help("Output directory for the generated files"),
        )
        .arg(
            clap::Arg::new("local")
                .long("local")
                .action(clap::ArgAction::SetTrue)
                .help("Write the output below the current directory"),
        )
        .arg(
            clap::Arg::new("only_sriov")
                .long("only-sriov")
                .action(clap::ArgAction::SetTrue)
                .help("Only apply SR-IOV configuration"),
        )
        .arg(
            clap::Arg::new("only_networkd")
                .long("only-networkd")
                .action(clap::ArgAction::SetTrue)
                .help("Only generate networkd configuration files"),
        )
        .arg(
            clap::Arg::new("reload")
                .long("reload")
                .action(clap::ArgAction::SetTrue)
                .help("Restart systemd-networkd and reload networkctl"),
        )
        .subcommand(
            clap::Command::new("configure")
                .about("Validate the configuration and apply it"),
        )
        .subcommand(
            clap::Command::new("apply")
                .about("Validate the configuration and apply it"),
        )
        .subcommand(
            clap::Command::new("generate")
                .about("Validate the configuration and apply it"),
        )
        .subcommand(
            clap::Command::new("rebind")
                .about("Rebind the virtual functions of SR-IOV adapters")
                .arg(
                    clap::Arg::new("PCI_ADDRESS")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .help("PCI addresses of PFs to rebind VFs of"),
                ),
        );

    let matches = cli_cmd.get_matches_mut();

    let log_level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else {
        match matches.get_count("verbose") {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    if !matches.get_flag("quiet") {
        let mut log_builder = env_logger::Builder::new();
        log_builder.filter(Some("netplanner"), log_level);
        log_builder.init();
    }

    log::debug!("netplanner version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = call_subcommand(&matches) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn call_subcommand(matches: &clap::ArgMatches) -> Result<(), CliError> {
    if let Some(rebind_matches) = matches.subcommand_matches("rebind") {
        let addresses: Vec<String> = rebind_matches
            .get_many::<String>("PCI_ADDRESS")
            .unwrap_or_default()
            .cloned()
            .collect();
        SriovManager::new().rebind(&addresses)?;
        Ok(())
    } else if matches.subcommand_matches("configure").is_some()
        || matches.subcommand_matches("apply").is_some()
        || matches.subcommand_matches("generate").is_some()
    {
        configure(matches)
    } else {
        Err(CliError::from("Unknown command"))
    }
}

fn configure(matches: &clap::ArgMatches) -> Result<(), CliError> {
    let loader = ConfigLoader::new(
        matches.get_one::<String>("config").map(Path::new),
    )?;
    let raw = loader.load_value()?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Merged configuration:\n{}", serde_yaml::to_string(&raw)?);
    }
    let config = NetplannerConfig::from_value(raw)?;
    let output = match matches.get_one::<String>("output") {
        Some(output) => output.clone(),
        None => {
            if loader.is_netplan() {
                NETPLAN_DEFAULT_OUTPUT_PATH.to_string()
            } else {
                DEFAULT_OUTPUT_PATH.to_string()
            }
        }
    };
    let provider =
        NetworkdProvider::new(&config, matches.get_flag("local"), &output);
    let only_sriov = matches.get_flag("only_sriov");
    let only_networkd = matches.get_flag("only_networkd");
    if !only_networkd {
        SriovManager::new().apply(&config)?;
    }
    if !only_sriov {
        provider.render()?;
        if matches.get_flag("reload") {
            provider.networkd_restart()?;
            provider.networkctl_reload()?;
        }
    }
    Ok(())
}
