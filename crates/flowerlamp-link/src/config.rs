//! Broker connection settings

use std::time::Duration;

use rumqttc::{MqttOptions, QoS};
use serde::{Deserialize, Serialize};

use crate::protocol::PayloadFormat;

/// MQTT delivery guarantee, serializable form of [`rumqttc::QoS`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qos {
    AtMostOnce,
    AtLeastOnce,
    #[default]
    ExactlyOnce,
}

impl From<Qos> for QoS {
    fn from(qos: Qos) -> Self {
        match qos {
            Qos::AtMostOnce => QoS::AtMostOnce,
            Qos::AtLeastOnce => QoS::AtLeastOnce,
            Qos::ExactlyOnce => QoS::ExactlyOnce,
        }
    }
}

/// Connection and publishing parameters for the status link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Broker host name.
    pub host: String,
    /// Broker TCP port.
    pub port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Topic used for both outgoing status and incoming messages.
    pub topic: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u64,
    /// Delivery guarantee for publish and subscribe.
    pub qos: Qos,
    /// Capacity of the inbound message queue.
    pub queue_capacity: usize,
    /// Payload encoding for status messages.
    pub format: PayloadFormat,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            host: "test.mosquitto.org".to_string(),
            port: crate::DEFAULT_PORT,
            client_id: "flower1".to_string(),
            topic: "M30-212B-18/FlowerLamp".to_string(),
            keep_alive_secs: 60,
            qos: Qos::ExactlyOnce,
            queue_capacity: 64,
            format: PayloadFormat::Text,
        }
    }
}

impl LinkConfig {
    /// Build rumqttc options from this config.
    pub fn mqtt_options(&self) -> MqttOptions {
        let mut options = MqttOptions::new(self.client_id.clone(), self.host.clone(), self.port);
        options.set_keep_alive(Duration::from_secs(self.keep_alive_secs.max(1)));
        options
    }
}
