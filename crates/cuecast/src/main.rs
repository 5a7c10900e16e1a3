//! Cuecast - OSC cue remote
//!
//! Sends start, stop and level commands for one cue to every target
//! receiver and prints what landed where.

#![warn(missing_docs)]

mod logging_setup;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cuecast_control::{
    build_command, parse_cue_address, ControlSurface, Dispatcher, DispatcherConfig, Endpoint,
    TracingSink, DEFAULT_PORT,
};
use cuecast_core::{ControlCommand, CueId, LogConfig, TriggerKind};

/// Receivers used when no `--target` is given
const STOCK_TARGETS: [&str; 2] = ["192.168.50.199", "192.168.50.117"];

#[derive(Parser, Debug)]
#[command(name = "cuecast", version, about = "Send OSC cue commands to show-control receivers")]
struct Cli {
    /// Receiver as HOST or HOST:PORT (repeatable)
    #[arg(short, long = "target", value_name = "HOST[:PORT]")]
    targets: Vec<String>,

    /// Port for targets given without one
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Per-target send timeout in milliseconds
    #[arg(long, default_value_t = 500)]
    timeout_ms: u64,

    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Plain log output without color codes
    #[arg(long)]
    no_ansi: bool,

    /// Print the message and its datagram instead of sending
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a cue
    Start {
        /// Cue number
        cue: CueId,
    },
    /// Stop a cue
    Stop {
        /// Cue number
        cue: CueId,
    },
    /// Set a cue's main level
    Level {
        /// Cue number
        cue: CueId,
        /// Fader position, 0.0 (closed) to 1.0 (open)
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// List the quick-select cues
    Palette,
}

impl Command {
    fn to_control(&self) -> Option<ControlCommand> {
        match *self {
            Command::Start { cue } => Some(ControlCommand::trigger(cue, TriggerKind::Start)),
            Command::Stop { cue } => Some(ControlCommand::trigger(cue, TriggerKind::Stop)),
            Command::Level { cue, value } => Some(ControlCommand::level(cue, value)),
            Command::Palette => None,
        }
    }
}

fn target_endpoints(dispatcher: &Dispatcher, targets: &[String]) -> Result<Vec<Endpoint>> {
    if targets.is_empty() {
        return STOCK_TARGETS
            .iter()
            .map(|t| dispatcher.parse_endpoint(t).map_err(Into::into))
            .collect();
    }
    targets
        .iter()
        .map(|t| {
            dispatcher
                .parse_endpoint(t)
                .with_context(|| format!("Invalid target {:?}", t))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging_setup::init(&LogConfig::new(cli.log_level.as_str()).with_ansi(!cli.no_ansi))?;

    let Some(command) = cli.command.to_control() else {
        for cue in CueId::palette() {
            println!("{}", cue);
        }
        return Ok(());
    };

    if cli.dry_run {
        let message = build_command(&command)?;
        println!("{}", message);
        println!("{}", hex::encode(message.serialize()));
        println!("{:?}", parse_cue_address(&message)?);
        return Ok(());
    }

    let config = DispatcherConfig::default()
        .with_default_port(cli.port)
        .with_send_timeout_ms(cli.timeout_ms);
    let surface = ControlSurface::new(Dispatcher::new(config)).with_sink(TracingSink);
    let dispatcher = surface.dispatcher();
    dispatcher.configure(target_endpoints(dispatcher, &cli.targets)?);

    let report = surface.execute(command).await?;

    println!("{}", report.status);
    for outcome in &report.outcomes {
        println!("  {}", outcome);
    }

    if report.all_failed() {
        bail!("No target accepted {}", report.status);
    }
    Ok(())
}
