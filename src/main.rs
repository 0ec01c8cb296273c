// Copyright (c) 2024 Nexus. All rights reserved.

mod auth;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod form;
mod logging;
mod session;
mod ui;

use crate::auth::{AuthClient, Endpoint};
use crate::config::{Config, get_config_dir, get_config_path};
use crate::consts::cli_consts::{ENVIRONMENT_VAR, LOG_FILE, PASSWORD_VAR};
use crate::environment::Environment;
use crate::form::LoginForm;
use crate::logging::LogSink;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive login form
    Start {
        /// Login URL, including the http:// or https:// scheme
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Pre-fill the email field
        #[arg(long, value_name = "EMAIL")]
        email: Option<String>,
    },
    /// Submit credentials once and print the response
    Submit {
        /// Email sent as the username
        #[arg(long, value_name = "EMAIL")]
        email: String,

        /// Password. Read from LOGIN_FORM_PASSWORD when omitted.
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,

        /// Login URL, including the http:// or https:// scheme
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
    /// Save the login URL to the config file
    SetEndpoint {
        /// Login URL, including the http:// or https:// scheme
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    let sink = match &args.command {
        Command::Start { .. } => LogSink::File(get_config_dir()?.join(LOG_FILE)),
        _ => LogSink::Stderr,
    };
    logging::init(sink)?;

    let environment_str = std::env::var(ENVIRONMENT_VAR).unwrap_or_default();
    let environment = if environment_str.is_empty() {
        Environment::default()
    } else {
        environment_str.parse::<Environment>().unwrap_or_else(|_| {
            report!(
                Warn,
                "Unknown environment",
                "'{}', using {}",
                environment_str,
                Environment::default()
            );
            Environment::default()
        })
    };

    match args.command {
        Command::Start { endpoint, email } => {
            let config = Config::load_or_default(&config_path)?;
            let client = build_client(&config, endpoint.as_deref(), environment)?;

            let mut form = LoginForm::new(config.clear_error_on_edit);
            if let Some(email) = email {
                form = form.with_email(email);
            }
            session::run_tui_mode(client, form).await
        }
        Command::Submit {
            email,
            password,
            endpoint,
        } => {
            let password = match password.or_else(|| std::env::var(PASSWORD_VAR).ok()) {
                Some(password) => password,
                None => {
                    let msg = format!("Pass --password or set {}.", PASSWORD_VAR);
                    report!(Error, "No password given", "{}", msg);
                    return Err(msg.into());
                }
            };

            let config = Config::load_or_default(&config_path)?;
            let client = build_client(&config, endpoint.as_deref(), environment)?;
            let endpoint = client.endpoint().to_string();
            session::run_headless_mode(&client, &endpoint, &email, &password).await
        }
        Command::SetEndpoint { url } => {
            let endpoint = match Endpoint::parse(&url) {
                Ok(endpoint) => endpoint,
                Err(e) => {
                    report!(Error, "Endpoint not saved", "{}", e);
                    return Err(e.into());
                }
            };

            let mut config = Config::load_or_default(&config_path)?;
            config.endpoint = Some(endpoint.to_string());
            config.save(&config_path)?;
            report!(Success, "Endpoint saved", "{}", endpoint);
            Ok(())
        }
        Command::Reset => {
            report!(Info, "Resetting", "removing {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolves the endpoint and builds the HTTP client for it.
fn build_client(
    config: &Config,
    cli_endpoint: Option<&str>,
    environment: Environment,
) -> Result<AuthClient, Box<dyn Error>> {
    let endpoint = config
        .resolve_endpoint(cli_endpoint, environment)
        .inspect_err(|e| report!(Error, "Invalid endpoint", "{}", e))?;
    Ok(AuthClient::new(endpoint, config.request_timeout())?)
}
