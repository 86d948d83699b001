mod cmd;
mod connect;
mod output;

use clap::{Parser, Subcommand};
use cmd::plan::RequestKind;
use connect::ConnectionArgs;
use dynamo_client::DynamoError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "replica-provider",
    about = "Custom-resource handler for DynamoDB global table replicas",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,

    /// Pretty-print the response JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Event phase: submit the replica change a lifecycle event requires
    OnEvent {
        /// Path to the event JSON ("-" reads stdin)
        #[arg(long, default_value = "-")]
        event: PathBuf,
    },

    /// Completion check: report whether the replica change has converged
    IsComplete {
        /// Path to the event JSON ("-" reads stdin)
        #[arg(long, default_value = "-")]
        event: PathBuf,
    },

    /// Show which replica change an event would submit, without submitting it
    Plan {
        /// Table name
        #[arg(long)]
        table: String,

        /// Region of the replica
        #[arg(long)]
        replica_region: String,

        /// Lifecycle transition to plan
        #[arg(long, value_enum, default_value = "update")]
        request_type: RequestKind,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the response JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(dispatch(cli)),
        Err(e) => Err(anyhow::Error::new(e).context("failed to start tokio runtime")),
    };

    if let Err(e) = result {
        let retryable = e
            .downcast_ref::<DynamoError>()
            .is_some_and(DynamoError::is_retryable);
        tracing::error!(retryable, "invocation failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::OnEvent { event } => cmd::on_event::run(&cli.conn, &event, cli.pretty).await,
        Commands::IsComplete { event } => {
            cmd::is_complete::run(&cli.conn, &event, cli.pretty).await
        }
        Commands::Plan {
            table,
            replica_region,
            request_type,
        } => cmd::plan::run(&cli.conn, &table, &replica_region, request_type, cli.pretty).await,
    }
}
