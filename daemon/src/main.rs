//! coinview daemon — serves unspent output queries over JSON-RPC.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use coinview_crypto::Base58AddressCodec;
use coinview_ledger::LedgerSnapshot;
use coinview_rpc::{RpcConfig, RpcServer, RpcState};
use coinview_utils::LogFormat;

#[derive(Parser)]
#[command(name = "coinview-daemon", about = "Unspent output query daemon")]
struct Cli {
    /// Interface to bind the RPC server on.
    #[arg(long, env = "COINVIEW_HOST")]
    host: Option<String>,

    /// RPC server port.
    #[arg(long, env = "COINVIEW_PORT")]
    port: Option<u16>,

    /// Ledger snapshot (JSON) to serve.
    #[arg(long, env = "COINVIEW_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Per-request deadline in milliseconds.
    #[arg(long, env = "COINVIEW_REQUEST_TIMEOUT_MS")]
    request_timeout_ms: Option<u64>,

    /// Answer cross-origin requests.
    #[arg(long, env = "COINVIEW_ENABLE_CORS")]
    cors: bool,

    /// Log format: "human" or "json".
    #[arg(long, env = "COINVIEW_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "COINVIEW_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "COINVIEW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Load the snapshot and serve RPC until Ctrl-C.
    Run,
    /// Validate the snapshot and report its contents, then exit.
    CheckSnapshot,
}

/// Merge the config file (if any) with CLI overrides.
fn build_config(cli: &Cli) -> anyhow::Result<RpcConfig> {
    let mut config = match &cli.config {
        Some(path) => RpcConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RpcConfig::default(),
    };

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(snapshot) = &cli.snapshot {
        config.snapshot_path = Some(snapshot.clone());
    }
    if let Some(timeout) = cli.request_timeout_ms {
        config.request_timeout_ms = timeout;
    }
    config.enable_cors |= cli.cors;
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_snapshot(config: &RpcConfig) -> anyhow::Result<LedgerSnapshot> {
    let path = config
        .snapshot_path
        .as_deref()
        .context("no ledger snapshot configured (use --snapshot or snapshot_path)")?;
    LedgerSnapshot::from_file(path)
        .with_context(|| format!("loading ledger snapshot {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    coinview_utils::init_logging(config.log_format, &config.log_level)
        .context("installing log subscriber")?;

    let snapshot = load_snapshot(&config)?;
    let head_seq = snapshot.head_seq;
    let output_count = snapshot.output_count();
    let utxos = snapshot
        .into_utxo_set()
        .context("building unspent output set")?;

    match cli.command {
        Command::CheckSnapshot => {
            tracing::info!(head_seq, outputs = output_count, "snapshot is valid");
        }
        Command::Run => {
            tracing::info!(
                "Starting coinview RPC on {}:{} (head {}, {} outputs)",
                config.host,
                config.port,
                head_seq,
                output_count
            );
            let state = RpcState::new(Arc::new(Base58AddressCodec), Arc::new(utxos));
            let server = RpcServer::new(config, state);
            server.start().await?;
            tracing::info!("coinview daemon exited cleanly");
        }
    }

    Ok(())
}
