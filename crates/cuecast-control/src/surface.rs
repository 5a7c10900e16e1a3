//! Control surface
//!
//! Glue between an intent source and the network: a [`ControlCommand`] goes
//! in, a [`DispatchReport`] comes out and is handed to every registered
//! [`StatusSink`].

use crossbeam_channel::Sender;
use cuecast_core::ControlCommand;
use tracing::{debug, info};

use crate::dispatch::{Dispatcher, Endpoint, SendFailure, SendOutcome};
use crate::osc::build_command;
use crate::Result;

/// What was sent and where it landed
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReport {
    /// The command that was executed
    pub command: ControlCommand,
    /// Human-readable message, e.g. `/cue/1/sliderLevel/0 -32.0`
    pub status: String,
    /// One outcome per endpoint, in endpoint order
    pub outcomes: Vec<SendOutcome>,
}

impl DispatchReport {
    /// Endpoints the datagram was handed off to
    pub fn delivered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Endpoints that were not reached
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.delivered_count()
    }

    /// True when there was at least one endpoint and none succeeded
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.delivered_count() == 0
    }

    /// Failed endpoints with their failure detail
    pub fn failures(&self) -> impl Iterator<Item = (&Endpoint, &SendFailure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.failure().map(|f| (o.endpoint(), f)))
    }
}

/// Receives a report after every executed command
pub trait StatusSink: Send + Sync {
    /// Handle one report; must not block the caller for long
    fn publish(&self, report: &DispatchReport);
}

impl StatusSink for Sender<DispatchReport> {
    fn publish(&self, report: &DispatchReport) {
        if self.send(report.clone()).is_err() {
            debug!("Status receiver dropped, report for {} discarded", report.status);
        }
    }
}

/// Logs each report through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn publish(&self, report: &DispatchReport) {
        info!(
            "{} -> {}/{} endpoint(s)",
            report.status,
            report.delivered_count(),
            report.outcomes.len()
        );
    }
}

/// Builds, sends and reports cue commands
pub struct ControlSurface {
    dispatcher: Dispatcher,
    sinks: Vec<Box<dyn StatusSink>>,
}

impl ControlSurface {
    /// Create a surface with no status sinks
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            sinks: Vec::new(),
        }
    }

    /// Add a status sink
    pub fn with_sink(mut self, sink: impl StatusSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// The dispatcher, for reconfiguring endpoints between commands
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Build the message for `command`, send it to every endpoint and report
    ///
    /// A command that cannot be built (level out of range) returns an error
    /// and nothing is sent. Send failures are never errors; they are listed
    /// in the report, which reaches the sinks even when every endpoint failed.
    pub async fn execute(&self, command: ControlCommand) -> Result<DispatchReport> {
        let message = build_command(&command)?;
        let outcomes = self.dispatcher.dispatch(&message).await;

        let report = DispatchReport {
            command,
            status: message.status_line(),
            outcomes,
        };
        for sink in &self.sinks {
            sink.publish(&report);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DispatcherConfig;
    use cuecast_core::CueId;

    fn report(outcomes: Vec<SendOutcome>) -> DispatchReport {
        DispatchReport {
            command: ControlCommand::Start {
                cue: CueId::new(1).unwrap(),
            },
            status: "/cue/1/start".to_string(),
            outcomes,
        }
    }

    #[test]
    fn test_report_counts() {
        let report = report(vec![
            SendOutcome::Success {
                endpoint: Endpoint::new("10.0.0.1"),
                bytes_sent: 20,
            },
            SendOutcome::Failure {
                endpoint: Endpoint::new("10.0.0.2"),
                detail: SendFailure::Transmit("unreachable".to_string()),
            },
        ]);
        assert_eq!(report.delivered_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.all_failed());

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0.host, "10.0.0.2");
    }

    #[test]
    fn test_empty_report_is_not_a_failure() {
        assert!(!report(Vec::new()).all_failed());
    }

    #[tokio::test]
    async fn test_invalid_level_sends_nothing() {
        let (tx, rx) = crossbeam_channel::unbounded::<DispatchReport>();
        let surface =
            ControlSurface::new(Dispatcher::new(DispatcherConfig::default())).with_sink(tx);

        let cue = CueId::new(1).unwrap();
        let err = surface
            .execute(ControlCommand::level(cue, 1.5))
            .await
            .unwrap_err();
        assert!(err.is_invalid_range());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_sink_receives_report_without_endpoints() {
        let (tx, rx) = crossbeam_channel::unbounded::<DispatchReport>();
        let surface = ControlSurface::new(Dispatcher::new(DispatcherConfig::default()))
            .with_sink(tx)
            .with_sink(TracingSink);

        let cue = CueId::new(4).unwrap();
        let report = surface
            .execute(ControlCommand::level(cue, 0.5))
            .await
            .unwrap();
        assert_eq!(report.status, "/cue/4/sliderLevel/0 -32.0");
        assert!(report.outcomes.is_empty());
        assert_eq!(rx.try_recv().unwrap(), report);
    }
}
