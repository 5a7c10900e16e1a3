//! UDP fan-out delivery
//!
//! A [`Dispatcher`] holds an ordered set of [`Endpoint`]s and fires each
//! message at all of them. Delivery is at-most-once and unconfirmed: UDP
//! gives no acknowledgement and nothing is retried.
//!
//! Each send resolves its host through the dispatcher's [`Resolve`]
//! implementation, binds an ephemeral socket and transmits, bounded by
//! [`DispatcherConfig::send_timeout`]. A failure is recorded in
//! that endpoint's [`SendOutcome`] and never stops the other sends.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cuecast_control::dispatch::{Dispatcher, DispatcherConfig, Endpoint};
//! use cuecast_control::osc::build_trigger;
//! use cuecast_core::{CueId, TriggerKind};
//!
//! # async fn run() -> cuecast_control::Result<()> {
//! let dispatcher = Dispatcher::new(DispatcherConfig::default().with_send_timeout_ms(250));
//! dispatcher.configure(vec![Endpoint::new("192.168.50.199")]);
//!
//! let message = build_trigger(CueId::new(1)?, TriggerKind::Start);
//! for outcome in dispatcher.dispatch(&message).await {
//!     println!("{}", outcome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod endpoint;
pub mod outcome;
pub mod resolver;

pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
pub use endpoint::{Endpoint, DEFAULT_PORT};
pub use outcome::{SendFailure, SendOutcome};
pub use resolver::{Resolve, SystemResolver};
