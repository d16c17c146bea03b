use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use iiko_client::api::{CommandsApi, EmployeesApi, MenuApi, TerminalGroupsApi};
use iiko_client::config::{CliArgs, Command};
use iiko_client::models::OrganizationsRequest;
use iiko_client::{Client, DomainError};

/// Exit code when the API answered with an error description
const EXIT_DOMAIN_ERROR: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    let log_level = args.log_level.to_lowercase();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(base_url = %args.base_url, "Starting iiko-cli");

    let client = Client::connect(args.client_config())
        .await
        .context("Failed to connect to iiko Cloud")?;

    let code = run(&client, &args.command).await?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn run(client: &Client, command: &Command) -> Result<i32> {
    match command {
        Command::Organizations => {
            let response = client
                .organizations(&OrganizationsRequest::default().with_additional_info(true))
                .await?;
            print_outcome(response)
        }
        Command::TerminalGroups { organizations } => {
            let response = client
                .terminal_groups()
                .terminal_groups(organizations, false)
                .await?;
            print_outcome(response)
        }
        Command::Nomenclature {
            organization,
            start_revision,
        } => {
            let response = client
                .menu()
                .nomenclature(organization, *start_revision)
                .await?;
            print_outcome(response)
        }
        Command::Couriers { organizations } => {
            let response = client.employees().couriers(organizations).await?;
            if let Ok(couriers) = &response {
                for group in &couriers.employees {
                    tracing::info!(
                        organization = %group.organization_id,
                        active = group.active().count(),
                        inactive = group.inactive().count(),
                        "Couriers"
                    );
                }
            }
            print_outcome(response)
        }
        Command::CommandStatus {
            organization,
            correlation_id,
        } => {
            let response = client
                .commands()
                .status(organization, correlation_id)
                .await?;
            print_outcome(response)
        }
    }
}

/// Print a successful response as pretty JSON, or the domain error to stderr
fn print_outcome<T: Serialize>(outcome: std::result::Result<T, DomainError>) -> Result<i32> {
    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}", err);
            if let Some(correlation_id) = &err.correlation_id {
                eprintln!("correlationId: {}", correlation_id);
            }
            Ok(EXIT_DOMAIN_ERROR)
        }
    }
}
