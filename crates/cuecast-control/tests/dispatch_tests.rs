use cuecast_control::{
    build_level, build_trigger, ControlSurface, DispatchReport, Dispatcher, DispatcherConfig,
    Endpoint, Message, Resolve, SendFailure, SendOutcome, SystemResolver,
};
use cuecast_core::{ControlCommand, CueId, TriggerKind};
use futures::future::BoxFuture;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;

/// Never answers for one host, defers to the system resolver for the rest
struct StallingResolver {
    host: String,
}

impl Resolve for StallingResolver {
    fn resolve<'a>(
        &'a self,
        endpoint: &'a Endpoint,
    ) -> BoxFuture<'a, Result<SocketAddr, SendFailure>> {
        if endpoint.host == self.host {
            return Box::pin(std::future::pending());
        }
        Box::pin(async move { SystemResolver.resolve(endpoint).await })
    }
}

async fn receiver() -> (UdpSocket, Endpoint) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, Endpoint::new("127.0.0.1").with_port(port))
}

async fn recv_datagram(socket: &UdpSocket) -> Vec<u8> {
    let mut buf = [0u8; 1536];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), socket.recv_from(&mut buf))
        .await
        .expect("no datagram received")
        .unwrap();
    buf[..len].to_vec()
}

fn test_config() -> DispatcherConfig {
    DispatcherConfig::default().with_send_timeout_ms(300)
}

fn cue(n: u32) -> CueId {
    CueId::new(n).unwrap()
}

#[tokio::test]
async fn test_empty_endpoint_set_is_noop() {
    let dispatcher = Dispatcher::new(test_config());
    let outcomes = dispatcher
        .dispatch(&build_trigger(cue(1), TriggerKind::Start))
        .await;
    assert!(outcomes.is_empty());
}

#[tokio::test]
async fn test_two_targets_receive_identical_datagrams() {
    let (first, first_endpoint) = receiver().await;
    let (second, second_endpoint) = receiver().await;

    let dispatcher = Dispatcher::with_endpoints(
        test_config(),
        vec![first_endpoint.clone(), second_endpoint.clone()],
    );
    let message = build_trigger(cue(1), TriggerKind::Start);
    let outcomes = dispatcher.dispatch(&message).await;

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].endpoint(), &first_endpoint);
    assert_eq!(outcomes[1].endpoint(), &second_endpoint);
    assert!(outcomes.iter().all(SendOutcome::is_success));

    let a = recv_datagram(&first).await;
    let b = recv_datagram(&second).await;
    assert_eq!(a, b);
    assert_eq!(a, message.serialize());
    assert_eq!(Message::deserialize(&a).unwrap().address(), "/cue/1/start");
}

#[tokio::test]
async fn test_unreachable_host_does_not_block_others() {
    let (socket, endpoint) = receiver().await;
    let unreachable = Endpoint::new("cue-target.invalid");

    let dispatcher =
        Dispatcher::with_endpoints(test_config(), vec![unreachable.clone(), endpoint.clone()]);
    let message = build_level(cue(3), 0.5).unwrap();
    let outcomes = dispatcher.dispatch(&message).await;

    assert_eq!(outcomes.len(), 2);
    match &outcomes[0] {
        SendOutcome::Failure { endpoint, detail } => {
            assert_eq!(endpoint, &unreachable);
            assert!(matches!(
                detail,
                SendFailure::Resolution(_) | SendFailure::Timeout(_)
            ));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(
        outcomes[1],
        SendOutcome::Success {
            endpoint,
            bytes_sent: message.serialize().len(),
        }
    );

    let received = recv_datagram(&socket).await;
    assert_eq!(received, message.serialize());
    assert_eq!(Message::deserialize(&received).unwrap(), message);
}

#[tokio::test]
async fn test_stalled_resolution_times_out_alone() {
    let (socket, endpoint) = receiver().await;
    let stalled = Endpoint::new("stalled.cue-target");

    let dispatcher =
        Dispatcher::with_endpoints(test_config(), vec![stalled.clone(), endpoint.clone()])
            .with_resolver(StallingResolver {
                host: stalled.host.clone(),
            });
    let timeout = dispatcher.config().send_timeout();
    let message = build_trigger(cue(7), TriggerKind::Start);

    let started = Instant::now();
    let outcomes = dispatcher.dispatch(&message).await;
    let elapsed = started.elapsed();

    assert_eq!(
        outcomes,
        vec![
            SendOutcome::Failure {
                endpoint: stalled,
                detail: SendFailure::Timeout(timeout),
            },
            SendOutcome::Success {
                endpoint,
                bytes_sent: message.serialize().len(),
            },
        ]
    );
    // Bounded by one timeout, not one per endpoint
    assert!(elapsed >= timeout);
    assert!(elapsed < timeout + Duration::from_secs(1));

    assert_eq!(recv_datagram(&socket).await, message.serialize());
}

#[tokio::test]
async fn test_reconfigure_between_dispatches() {
    let (first, first_endpoint) = receiver().await;
    let (second, second_endpoint) = receiver().await;

    let dispatcher = Dispatcher::with_endpoints(test_config(), vec![first_endpoint]);
    let start = build_trigger(cue(2), TriggerKind::Start);
    assert_eq!(dispatcher.dispatch(&start).await.len(), 1);
    assert_eq!(recv_datagram(&first).await, start.serialize());

    dispatcher.configure(vec![second_endpoint]);
    let stop = build_trigger(cue(2), TriggerKind::Stop);
    assert_eq!(dispatcher.dispatch(&stop).await.len(), 1);
    assert_eq!(recv_datagram(&second).await, stop.serialize());
}

#[tokio::test]
async fn test_surface_reports_every_failure() {
    let (tx, rx) = crossbeam_channel::unbounded::<DispatchReport>();
    let dispatcher = Dispatcher::with_endpoints(
        test_config(),
        vec![
            Endpoint::new("first.invalid"),
            Endpoint::new("second.invalid"),
        ],
    );
    let surface = ControlSurface::new(dispatcher).with_sink(tx);

    let report = surface
        .execute(ControlCommand::trigger(cue(9), TriggerKind::Stop))
        .await
        .unwrap();

    assert_eq!(report.status, "/cue/9/stop");
    assert!(report.all_failed());
    assert_eq!(report.failures().count(), 2);
    assert_eq!(rx.try_recv().unwrap(), report);
}

#[tokio::test]
async fn test_surface_level_end_to_end() {
    let (socket, endpoint) = receiver().await;
    let surface = ControlSurface::new(Dispatcher::with_endpoints(test_config(), vec![endpoint]));

    let report = surface
        .execute(ControlCommand::level(cue(1), 1.0))
        .await
        .unwrap();
    assert_eq!(report.delivered_count(), 1);
    assert_eq!(report.status, "/cue/1/sliderLevel/0 0.0");

    let received = Message::deserialize(&recv_datagram(&socket).await).unwrap();
    assert_eq!(received.address(), "/cue/1/sliderLevel/0");
    assert_eq!(received.arguments()[0].as_float(), Some(0.0));
}

#[test]
fn test_config_json() {
    let config: DispatcherConfig = serde_json::from_str(r#"{"send_timeout_ms": 100}"#).unwrap();
    assert_eq!(config.send_timeout(), Duration::from_millis(100));
    assert_eq!(config.default_port, 53000);

    let json = serde_json::to_string(&DispatcherConfig::default()).unwrap();
    let back: DispatcherConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, DispatcherConfig::default());
}
