//! MQTT status link

use std::time::Duration;

use rumqttc::{AsyncClient, ConnectReturnCode, Event, EventLoop, Outgoing, Packet, QoS};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::LinkError;
use crate::config::LinkConfig;
use crate::protocol::{InboundMessage, PayloadFormat, StatusMessage};

/// Delay before polling again after a connection error
const RECONNECT_DELAY: Duration = Duration::from_secs(1);
/// How long shutdown waits for the broker to take the disconnect
const DISCONNECT_GRACE: Duration = Duration::from_secs(2);
/// Request channel capacity between client handle and event loop
const REQUEST_CAPACITY: usize = 16;

/// Trait the application implements to consume inbound messages
pub trait InboundHandler: Send + 'static {
    fn handle_message(&mut self, msg: InboundMessage);
}

/// Handler that writes every inbound message to the log
pub struct LogHandler;

impl InboundHandler for LogHandler {
    fn handle_message(&mut self, msg: InboundMessage) {
        log::info!("[{}] {}", msg.topic, msg.payload);
    }
}

/// Link handle - keep this alive while status should flow
pub struct StatusLink {
    client: AsyncClient,
    topic: String,
    qos: QoS,
    format: PayloadFormat,
    shutdown: watch::Sender<bool>,
    event_task: JoinHandle<()>,
    drain_task: JoinHandle<()>,
}

impl StatusLink {
    /// Connect to the broker in the background.
    /// Must be called from within a tokio runtime. Returns immediately.
    pub fn start<H: InboundHandler>(config: &LinkConfig, handler: H) -> Self {
        let (client, eventloop) = AsyncClient::new(config.mqtt_options(), REQUEST_CAPACITY);
        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let qos = QoS::from(config.qos);

        log::info!(
            "Connecting status link to {}:{} as {}",
            config.host,
            config.port,
            config.client_id
        );

        let event_task = tokio::spawn(run_event_loop(
            eventloop,
            client.clone(),
            config.topic.clone(),
            qos,
            tx,
            shutdown_rx.clone(),
        ));
        let drain_task = tokio::spawn(drain_inbound(rx, handler, shutdown_rx));

        Self {
            client,
            topic: config.topic.clone(),
            qos,
            format: config.format,
            shutdown,
            event_task,
            drain_task,
        }
    }

    /// Queue one status message for publishing.
    pub async fn publish(&self, msg: &StatusMessage) -> Result<(), LinkError> {
        if *self.shutdown.borrow() {
            return Err(LinkError::Closed);
        }
        let payload = msg.render(self.format);
        log::debug!("Publishing to {}: {}", self.topic, payload);
        self.client
            .publish(self.topic.clone(), self.qos, false, payload.into_bytes())
            .await?;
        Ok(())
    }

    /// Publish each message independently. Returns how many were queued.
    pub async fn publish_all(&self, msgs: &[StatusMessage]) -> usize {
        let mut sent = 0;
        for msg in msgs {
            match self.publish(msg).await {
                Ok(()) => sent += 1,
                Err(e) => log::warn!("Failed to publish {:?}: {}", msg, e),
            }
        }
        sent
    }

    /// Disconnect from the broker and stop both background tasks.
    pub async fn shutdown(self) {
        if let Err(e) = self.client.try_disconnect() {
            log::warn!("Failed to request disconnect: {}", e);
        }

        let mut event_task = self.event_task;
        if tokio::time::timeout(DISCONNECT_GRACE, &mut event_task).await.is_err() {
            log::warn!("Broker did not take the disconnect in time, stopping link");
            let _ = self.shutdown.send(true);
            let _ = event_task.await;
        }

        let _ = self.shutdown.send(true);
        let _ = self.drain_task.await;
        log::info!("Status link closed");
    }
}

/// Drive the MQTT connection, forwarding inbound publishes to the queue.
async fn run_event_loop(
    mut eventloop: EventLoop,
    client: AsyncClient,
    topic: String,
    qos: QoS,
    tx: mpsc::Sender<InboundMessage>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            event = eventloop.poll() => match event {
                Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                    if ack.code == ConnectReturnCode::Success {
                        log::info!("Status link connected, subscribing to {}", topic);
                        if let Err(e) = client.try_subscribe(topic.clone(), qos) {
                            log::error!("Failed to subscribe to {}: {}", topic, e);
                        }
                    } else {
                        log::warn!("Broker refused connection: {:?}", ack.code);
                    }
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    let Some(msg) =
                        InboundMessage::from_publish(&topic, &publish.topic, &publish.payload)
                    else {
                        continue;
                    };
                    match tx.try_send(msg) {
                        Ok(()) => {}
                        Err(mpsc::error::TrySendError::Full(msg)) => {
                            log::warn!("Inbound queue full, dropping: {}", msg.payload);
                        }
                        Err(mpsc::error::TrySendError::Closed(_)) => break,
                    }
                }
                Ok(Event::Outgoing(Outgoing::Disconnect)) => {
                    log::info!("Status link disconnected");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Status link connection error: {}", e);
                    tokio::time::sleep(RECONNECT_DELAY).await;
                }
            }
        }
    }
}

/// Hand queued messages to the handler until the queue closes or shutdown.
async fn drain_inbound<H: InboundHandler>(
    mut rx: mpsc::Receiver<InboundMessage>,
    mut handler: H,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            msg = rx.recv() => match msg {
                Some(msg) => handler.handle_message(msg),
                None => break,
            },
            _ = shutdown.changed() => break,
        }
    }
}
