/*
[INPUT]:  CLI arguments, YAML profile, ADMIN_API_* environment, Ctrl-C
[OUTPUT]: Pretty-printed JSON result of one backend operation on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use admin_api_cli::commands::ConfigCommand;
use admin_api_cli::config::default_config_path;
use admin_api_cli::{ApiProfile, Command, execute};
use admin_api_client::SystemManageApi;

#[derive(Parser, Debug)]
#[command(name = "admin-api", version, about = "Admin backend system-management client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Overrides `base_url` from the profile and environment
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "token", value_name = "TOKEN", global = true)]
    token: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Config(command) = args.command {
        return run_config_command(command, args.config_path, args.base_url, args.token);
    }

    let mut profile = ApiProfile::load(args.config_path.as_deref()).context("load config")?;
    profile.apply_overrides(args.base_url, args.token);
    info!(base_url = %profile.base_url, "configuration loaded");

    let api = SystemManageApi::with_config(profile.client_config()).context("build client")?;
    if let Some(credentials) = profile.credentials() {
        api.transport().set_credentials(credentials);
    }

    let output = tokio::select! {
        result = execute(&api, args.command) => result?,
        signal = tokio::signal::ctrl_c() => {
            if let Err(err) = signal {
                warn!(error = %err, "failed to install SIGINT handler");
            }
            bail!("interrupted");
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn run_config_command(
    command: ConfigCommand,
    config_path: Option<PathBuf>,
    base_url: Option<String>,
    token: Option<String>,
) -> Result<()> {
    match command {
        ConfigCommand::Init { output, force } => {
            let path = output
                .or(config_path)
                .or_else(default_config_path)
                .context("no config directory on this platform; pass --output")?;
            ApiProfile::write_template(&path, force)?;
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            let mut profile = ApiProfile::load(config_path.as_deref()).context("load config")?;
            profile.apply_overrides(base_url, token);
            print!("{}", serde_yaml::to_string(&profile.redacted())?);
        }
    }
    Ok(())
}
