use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use maxtemp_core::{
    Config, FormController, client_from_config,
    config::DEFAULT_ENDPOINT,
    model::{DATE_PLACEHOLDER, MIN_TEMP_PLACEHOLDER},
};

use crate::render::submit_and_render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "maxtemp", version, about = "Predict the maximum temperature for a day")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit the form once and print the predicted maximum temperature.
    Predict {
        /// Date in YYYY-MM-DD form; prompted for when absent.
        #[arg(long)]
        date: Option<String>,

        /// Minimum temperature in Fahrenheit; prompted for when absent.
        #[arg(long, allow_hyphen_values = true)]
        min_temp: Option<String>,

        /// Prediction endpoint, overriding the config file.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Fill in and submit the form repeatedly until cancelled.
    Form {
        /// Prediction endpoint, overriding the config file.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Set the prediction endpoint interactively.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Predict {
                date,
                min_temp,
                endpoint,
            } => {
                let controller = controller(endpoint.as_deref())?;

                let date = match date {
                    Some(date) => date,
                    None => prompt_date("")?,
                };
                let min_temp = match min_temp {
                    Some(min_temp) => min_temp,
                    None => prompt_min_temp("")?,
                };

                controller.set_date(date);
                controller.set_min_temp(min_temp);
                submit_and_render(&controller, &mut io::stdout(), &mut io::stderr()).await?;
            }
            Command::Form { endpoint } => {
                let controller = controller(endpoint.as_deref())?;
                println!("Press Esc to quit.");

                loop {
                    let state = controller.state();

                    let date = match prompt_date(&state.date) {
                        Ok(date) => date,
                        Err(err) if is_cancel(&err) => break,
                        Err(err) => return Err(err),
                    };
                    let min_temp = match prompt_min_temp(&state.min_temp) {
                        Ok(min_temp) => min_temp,
                        Err(err) if is_cancel(&err) => break,
                        Err(err) => return Err(err),
                    };

                    controller.set_date(date);
                    controller.set_min_temp(min_temp);
                    submit_and_render(&controller, &mut io::stdout(), &mut io::stderr()).await?;
                }
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

fn controller(endpoint: Option<&str>) -> anyhow::Result<FormController> {
    let config = Config::load()?;
    let client = client_from_config(&config, endpoint)?;
    tracing::debug!(endpoint = %client.endpoint(), "Using prediction endpoint");
    Ok(FormController::new(client))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current = config
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let endpoint = Text::new("Prediction endpoint:")
        .with_initial_value(&current)
        .prompt()
        .context("Failed to read prediction endpoint")?;

    config.set_endpoint(&endpoint)?;
    config.save()?;

    println!(
        "Saved endpoint {} to {}",
        config.endpoint_url()?,
        Config::config_file_path()?.display()
    );
    Ok(())
}

fn prompt_date(initial: &str) -> anyhow::Result<String> {
    Text::new("Date:")
        .with_placeholder(DATE_PLACEHOLDER)
        .with_initial_value(initial)
        .prompt()
        .context("Failed to read date")
}

fn prompt_min_temp(initial: &str) -> anyhow::Result<String> {
    Text::new("Minimum temperature:")
        .with_placeholder(MIN_TEMP_PLACEHOLDER)
        .with_initial_value(initial)
        .prompt()
        .context("Failed to read minimum temperature")
}

fn is_cancel(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}
