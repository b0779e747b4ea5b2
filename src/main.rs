use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use frameinput::config::{Config, OutputFormat};
use frameinput::input::{GLFW_KEYS, KeyMapTable};
use frameinput::replay::{self, ReplayScript};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frameinput")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FRAMEINPUT_GIT_HASH"), ")"),
    about = "Frame-synchronized input tracking: replay scripts and inspect key tables"
)]
struct Cli {
    /// Use this configuration file instead of ~/.config/frameinput/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a replay script and print what the tracker saw on every frame
    Replay {
        /// TOML script with one [[frame]] table per update
        script: PathBuf,

        /// Print a JSON array instead of one line per frame
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Print a backend's key table
    Keys {
        #[arg(long, value_enum, default_value_t = KeyTableChoice::Glfw)]
        backend: KeyTableChoice,
    },

    /// Show the configuration file location or its effective contents
    Config {
        /// Print the configuration file path
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "dump")]
        path: bool,

        /// Print the effective configuration as TOML
        #[arg(long, action = ArgAction::SetTrue)]
        dump: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KeyTableChoice {
    Glfw,
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script, json } => {
            let config = load_config(cli.config.as_ref())?;
            let parsed = ReplayScript::load(&script)
                .with_context(|| format!("Failed to load replay script {}", script.display()))?;
            log::info!(
                "Replaying {} frames ({} updates) from {}",
                parsed.frames.len(),
                parsed.update_count(),
                script.display()
            );

            let reports = replay::run(&parsed, &config.input)?;

            let format = if json {
                OutputFormat::Json
            } else {
                config.replay.output
            };
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
                OutputFormat::Text => {
                    for report in reports
                        .iter()
                        .filter(|report| config.replay.show_idle_frames || !report.is_idle())
                    {
                        println!("{report}");
                    }
                }
            }
        }
        Command::Keys { backend } => {
            let source = match backend {
                KeyTableChoice::Glfw => GLFW_KEYS,
            };
            let table = KeyMapTable::build(source);
            for entry in table.entries() {
                println!(
                    "{:<14} native {:>4}  vk 0x{:02X}",
                    entry.key.name(),
                    entry.native.0,
                    entry.key.vk()
                );
            }
            log::debug!("{} keys listed", table.len());
        }
        Command::Config { path, dump } => {
            if path || !dump {
                let location = match &cli.config {
                    Some(explicit) => explicit.clone(),
                    None => Config::get_config_path()?,
                };
                println!("{}", location.display());
            } else {
                let config = load_config(cli.config.as_ref())?;
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}
