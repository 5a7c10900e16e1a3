//! Cuecast Control - OSC cue messaging and fan-out delivery
//!
//! This crate turns cue commands into OSC messages and fires them at every
//! configured receiver:
//! - **OSC**: message model, wire codec, cue address scheme and builders
//! - **Dispatch**: best-effort UDP fan-out with per-endpoint outcomes
//! - **Surface**: command in, status report out
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cuecast_control::{ControlSurface, Dispatcher, DispatcherConfig, Endpoint};
//! use cuecast_core::{ControlCommand, CueId, TriggerKind};
//!
//! # async fn run() -> cuecast_control::Result<()> {
//! let dispatcher = Dispatcher::new(DispatcherConfig::default());
//! dispatcher.configure(vec![
//!     "192.168.50.199".parse::<Endpoint>()?,
//!     "192.168.50.117".parse::<Endpoint>()?,
//! ]);
//!
//! let surface = ControlSurface::new(dispatcher);
//! let cue = CueId::new(1)?;
//! let report = surface
//!     .execute(ControlCommand::trigger(cue, TriggerKind::Start))
//!     .await?;
//! println!("{} ({} delivered)", report.status, report.delivered_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`osc`] - Message model, codec and builders
//! - [`dispatch`] - Endpoints and the UDP dispatcher
//! - [`surface`] - Command execution and status sinks
//! - [`error`] - Error types

#![allow(missing_docs)]

/// Fan-out delivery over UDP
pub mod dispatch;
/// Error types
pub mod error;
/// OSC messages for cue control
pub mod osc;
/// Command execution and status reporting
pub mod surface;

// Re-exports
pub use dispatch::{
    Dispatcher, DispatcherConfig, Endpoint, Resolve, SendFailure, SendOutcome, SystemResolver,
    DEFAULT_PORT,
};
pub use error::{ControlError, Result};
pub use osc::{build_command, build_level, build_trigger, parse_cue_address, Argument, Message};
pub use surface::{ControlSurface, DispatchReport, StatusSink, TracingSink};
