//! # gpass CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.
//!
//! Exit status: `0` trusted, `1` error, `2` parsed but untrusted.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

/// Green Pass certificate verifier.
///
/// Checks the signature on a decoded Green Pass QR payload against the
/// configured trust anchors and prints the people it covers.
#[derive(Parser, Debug)]
#[command(name = "gpass", version, about)]
struct Cli {
    /// Log output format (stderr).
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text, env = "GPASS_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Verify a certificate payload.
    Verify(gpass_cli::verify::VerifyArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    match cli.command {
        Commands::Verify(args) => {
            let trusted = gpass_cli::verify::run(&args)?;
            tracing::info!(trusted, "verification finished");
            Ok(if trusted {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
    }
}
