//! Terminal client for the agenda backend.
//!
//! Shares the browser client's session core: the token lives in a JSON
//! session file instead of `localStorage`, and every call goes through the
//! same middleware stack, so a 401 clears the file just as it clears the
//! browser session.


use std::path::PathBuf;
use std::time::Duration;

use agenda::config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};
use agenda::net::api::ApiClient;
use agenda::net::error::{ApiError, TransportError};
use agenda::net::native::ReqwestTransport;
use agenda::net::types::{Method, UnknownMethod};
use agenda::state::session::SessionStore;
use agenda::storage::FileStorage;
use agenda::util::period::Period;
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Method(#[from] UnknownMethod),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid month {0}; expected 1-12")]
    InvalidMonth(u32),
}

#[derive(Parser, Debug)]
#[command(name = "agenda", about = "Agenda API command-line client")]
struct Cli {
    #[arg(long, env = "AGENDA_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(
        long,
        env = "AGENDA_API_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_ms: u64,

    #[arg(long, env = "AGENDA_SESSION_FILE", default_value = ".agenda-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token.
    Login {
        email: String,
        #[arg(long, env = "AGENDA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the stored session.
    Logout,
    /// Show the signed-in user's profile.
    User,
    /// List events for a month (defaults to the current month).
    Events {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Send an arbitrary authorized request.
    Request {
        method: String,
        url: String,
        #[arg(long)]
        data: Option<String>,
    },
    /// Print the locally stored session.
    Status,
}

impl Cli {
    fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.config();
    let session = SessionStore::new(FileStorage::new(&cli.session_file));
    let client = ApiClient::new(ReqwestTransport::new(&config)?, session);
    tracing::debug!(base_url = %config.base_url, "agenda client ready");

    run(&client, cli.command).await
}

async fn run(client: &ApiClient<ReqwestTransport, FileStorage>, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let data = client.login(&email, &password).await?;
            if client.session().has_token() {
                tracing::info!("signed in as {email}");
            } else {
                tracing::warn!("login response carried no api_token; session not stored");
            }
            print_json(data.get("user").unwrap_or(&Value::Null))
        }
        Command::Logout => {
            // The local session is cleared even when the server call fails.
            if let Err(e) = client.logout().await {
                tracing::warn!(error = %e, "remote logout failed");
            }
            tracing::info!("signed out");
            Ok(())
        }
        Command::User => print_json(&client.user().await?),
        Command::Events { month, year } => {
            let period = resolve_period(month, year)?;
            print_json(&client.events(period.month, period.year).await?)
        }
        Command::Request { method, url, data } => {
            let method: Method = method.parse()?;
            let body = parse_data(data.as_deref())?;
            print_json(&client.request(method, &url, body).await?)
        }
        Command::Status => {
            let session = client.session().load();
            print_json(&serde_json::json!({
                "isAuthenticated": session.is_authenticated,
                "user": session.user,
            }))
        }
    }
}

fn resolve_period(month: Option<u32>, year: Option<i32>) -> Result<Period, CliError> {
    let current = Period::current();
    let month = month.unwrap_or(current.month);
    if !(1..=12).contains(&month) {
        return Err(CliError::InvalidMonth(month));
    }
    Ok(Period { year: year.unwrap_or(current.year), month })
}

fn parse_data(data: Option<&str>) -> Result<Option<Value>, CliError> {
    match data.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
