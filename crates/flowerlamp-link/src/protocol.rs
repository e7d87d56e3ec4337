//! Status protocol - messages published to and received from the broker

use serde::{Deserialize, Serialize};

/// Encoding used for outgoing status payloads
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// Human-readable line, e.g. `Lamp on: 1`
    #[default]
    Text,
    /// JSON object, e.g. `{"kind":"lamp_state","value":true}`
    Json,
}

/// One status value produced by an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StatusMessage {
    /// Sun altitude in degrees
    SunAltitude(f64),
    /// Sun azimuth in degrees
    SunAzimuth(f64),
    /// Lamp power state
    LampState(bool),
}

impl StatusMessage {
    /// Render the payload in the requested format.
    pub fn render(&self, format: PayloadFormat) -> String {
        match format {
            PayloadFormat::Text => self.to_text(),
            PayloadFormat::Json => serde_json::to_string(self).unwrap_or_else(|e| {
                log::warn!("Failed to encode status as JSON, sending text: {}", e);
                self.to_text()
            }),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::SunAltitude(altitude) => format!("Sun altitude: {:.6}", altitude),
            Self::SunAzimuth(azimuth) => format!("Sun azimuth: {:.6}", azimuth),
            Self::LampState(on) => format!("Lamp on: {}", u8::from(*on)),
        }
    }
}

/// The three messages sent after each evaluation, in publish order.
pub fn status_report(altitude: f64, azimuth: f64, lamp_on: bool) -> [StatusMessage; 3] {
    [
        StatusMessage::SunAltitude(altitude),
        StatusMessage::SunAzimuth(azimuth),
        StatusMessage::LampState(lamp_on),
    ]
}

/// Message received on the subscribed topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: String,
}

impl InboundMessage {
    /// Accept a publish only when it arrived on `subscribed`.
    pub fn from_publish(subscribed: &str, topic: &str, payload: &[u8]) -> Option<Self> {
        if topic != subscribed {
            return None;
        }
        Some(Self {
            topic: topic.to_string(),
            payload: String::from_utf8_lossy(payload).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rendering() {
        assert_eq!(
            StatusMessage::SunAltitude(12.5).render(PayloadFormat::Text),
            "Sun altitude: 12.500000"
        );
        assert_eq!(
            StatusMessage::SunAzimuth(-3.25).render(PayloadFormat::Text),
            "Sun azimuth: -3.250000"
        );
        assert_eq!(StatusMessage::LampState(true).render(PayloadFormat::Text), "Lamp on: 1");
        assert_eq!(StatusMessage::LampState(false).render(PayloadFormat::Text), "Lamp on: 0");
    }

    #[test]
    fn test_json_rendering() {
        let json = StatusMessage::LampState(true).render(PayloadFormat::Json);
        assert_eq!(json, r#"{"kind":"lamp_state","value":true}"#);

        let parsed: StatusMessage = serde_json::from_str(
            &StatusMessage::SunAzimuth(181.0).render(PayloadFormat::Json),
        )
        .unwrap();
        assert_eq!(parsed, StatusMessage::SunAzimuth(181.0));
    }

    #[test]
    fn test_status_report_order() {
        let report = status_report(10.0, 200.0, false);
        assert_eq!(report[0], StatusMessage::SunAltitude(10.0));
        assert_eq!(report[1], StatusMessage::SunAzimuth(200.0));
        assert_eq!(report[2], StatusMessage::LampState(false));
    }

    #[test]
    fn test_inbound_topic_filter() {
        let topic = "M30-212B-18/FlowerLamp";
        let msg = InboundMessage::from_publish(topic, topic, b"Lamp on: 1").unwrap();
        assert_eq!(msg.payload, "Lamp on: 1");
        assert!(InboundMessage::from_publish(topic, "other/topic", b"x").is_none());
    }

    #[test]
    fn test_inbound_invalid_utf8_is_lossy() {
        let msg = InboundMessage::from_publish("t", "t", &[0x66, 0xff, 0x6f]).unwrap();
        assert_eq!(msg.payload, "f\u{fffd}o");
    }
}
