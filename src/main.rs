mod formatter;
mod spacelift;
use crate::spacelift::prelude::*;
use anyhow::Context;
use clap::Parser;
use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Spacelift stack and run helper")]
struct Cli {
    #[arg(
        long,
        value_name = "URL",
        help = "Spacelift API endpoint",
        env = "SPACELIFT_API_KEY_ENDPOINT",
        global = true
    )]
    endpoint: Option<String>,
    #[arg(
        long,
        value_name = "ACCOUNT",
        help = "Spacelift account name, used when no endpoint is given",
        env = "SPACELIFT_ACCOUNT",
        global = true
    )]
    account: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Exchange the API key for a token and report the result
    Auth {
        #[arg(long, help = "Print the issued JWT to stdout")]
        show_token: bool,
    },
    /// List stacks visible to the API key
    Stacks,
    /// Trigger a run on a stack
    Trigger {
        #[arg(value_name = "STACK_ID")]
        stack_id: String,
    },
    /// Confirm a run waiting for approval
    Approve {
        #[arg(value_name = "STACK_ID")]
        stack_id: String,
        #[arg(value_name = "RUN_ID")]
        run_id: String,
    },
    /// Stop a run
    Stop {
        #[arg(value_name = "STACK_ID")]
        stack_id: String,
        #[arg(value_name = "RUN_ID")]
        run_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        endpoint,
        account,
        command,
    } = Cli::parse();

    let endpoint = endpoint_url(endpoint.as_deref(), account.as_deref())?;
    let credentials = Credentials::from_env()?;
    let client = Client::connect(endpoint, &credentials)
        .await
        .context("authentication failed")?;

    let output = run_command(&client, command).await?;
    print!("{output}");

    Ok(())
}

async fn run_command(client: &Client, command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::Auth { show_token } => match client.token() {
            Some(token) if show_token => format!("{}\n", token.expose_secret()),
            _ => format!("Authenticated against {}\n", client.endpoint()),
        },
        Command::Stacks => {
            let stacks = list_stacks(client)
                .await
                .context("failed to list stacks")?;
            crate::formatter::format_stacks(&stacks)
        }
        Command::Trigger { stack_id } => {
            let run = trigger_run(client, &stack_id)
                .await
                .with_context(|| format!("failed to trigger run for stack {stack_id}"))?;
            crate::formatter::format_run("Run triggered", &run)
        }
        Command::Approve { stack_id, run_id } => {
            let run = approve_run(client, &stack_id, &run_id)
                .await
                .with_context(|| format!("failed to approve run {run_id} on stack {stack_id}"))?;
            crate::formatter::format_run("Run approved", &run)
        }
        Command::Stop { stack_id, run_id } => {
            let run = stop_run(client, &stack_id, &run_id)
                .await
                .with_context(|| format!("failed to stop run {run_id} on stack {stack_id}"))?;
            crate::formatter::format_run("Run stopped", &run)
        }
    };

    Ok(output)
}
