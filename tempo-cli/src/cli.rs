use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tempo_core::client::{OpenWeatherClient, fetch_snapshot};
use tempo_core::config::Config;
use tempo_core::present::Dashboard;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tempo", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and the startup city.
    Configure,

    /// Render the dashboard for a city once.
    Show {
        /// City name, e.g. "Recife".
        city: String,
    },

    /// Interactive dashboard: loads the startup city, then prompts for
    /// further cities until the input is left empty.
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
            Command::Dashboard => dashboard_loop().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let default_city = Text::new("Startup city:")
        .with_default(config.default_city())
        .prompt()
        .context("Failed to read startup city")?;
    config.set_default_city(default_city);

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

fn client_from_config(config: &Config) -> anyhow::Result<OpenWeatherClient> {
    Ok(OpenWeatherClient::new(config.api_key()?.to_owned()))
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = client_from_config(&config)?;

    let snapshot = fetch_snapshot(&client, city).await?;
    let dashboard = Dashboard::derive(&snapshot, Local::now())?;
    print!("{}", render::dashboard(&dashboard));

    Ok(())
}

/// One submission at a time: each fetch cycle is awaited before the next
/// prompt, so overlapping requests cannot race. A failed cycle leaves the
/// previously rendered dashboard in place and shows the error under it.
async fn dashboard_loop() -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = client_from_config(&config)?;

    let mut last_good: Option<Dashboard> = None;
    let mut city = config.default_city().to_owned();

    loop {
        println!("Buscando {city}...");
        let outcome = fetch_snapshot(&client, &city)
            .await
            .map_err(anyhow::Error::from)
            .and_then(|snapshot| {
                Dashboard::derive(&snapshot, Local::now()).map_err(anyhow::Error::from)
            });

        match outcome {
            Ok(dashboard) => {
                print!("{}", render::dashboard(&dashboard));
                last_good = Some(dashboard);
            }
            Err(err) => {
                if let Some(dashboard) = &last_good {
                    print!("{}", render::dashboard(dashboard));
                }
                println!("{}", render::error_banner(&err));
            }
        }

        match Text::new("Digite o nome da cidade (vazio para sair):").prompt() {
            Ok(input) => {
                let input = input.trim().to_owned();
                if input.is_empty() {
                    break;
                }
                city = input;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        }
    }

    Ok(())
}
