//! Outcome of a lamp evaluation.

use serde::Serialize;

use crate::atmosphere::Sun;
use crate::core::types::Timestamp;
use flowerlamp_link::{StatusMessage, status_report};

/// Why the lamp ended up on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Decision {
    /// Sun is up but the cloud at this index shades the lamp.
    Shaded { cloud: usize },
    /// Sun is up and nothing shades the lamp.
    Daylight,
    /// Sun is at or below the horizon.
    Night,
}

impl Decision {
    /// Whether this outcome powers the lamp.
    #[inline]
    pub fn lamp_on(self) -> bool {
        !matches!(self, Self::Daylight)
    }
}

/// Snapshot of one evaluation, suitable for reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub timestamp: Timestamp,
    pub altitude: f64,
    pub azimuth: f64,
    /// Unit vector toward the sun (east-north-up).
    pub direction: [f64; 3],
    pub decision: Decision,
}

impl Evaluation {
    pub fn new(timestamp: Timestamp, sun: &Sun, decision: Decision) -> Self {
        Self {
            timestamp,
            altitude: sun.altitude(),
            azimuth: sun.azimuth(),
            direction: sun.direction().to_array(),
            decision,
        }
    }

    #[inline]
    pub fn lamp_on(&self) -> bool {
        self.decision.lamp_on()
    }

    /// Messages to publish for this evaluation.
    pub fn status(&self) -> [StatusMessage; 3] {
        status_report(self.altitude, self.azimuth, self.lamp_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_lamp_on_per_outcome() {
        assert!(Decision::Shaded { cloud: 0 }.lamp_on());
        assert!(Decision::Night.lamp_on());
        assert!(!Decision::Daylight.lamp_on());
    }

    #[test]
    fn test_status_from_evaluation() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let eval = Evaluation::new(ts, &Sun::fixed(30.0, 170.0), Decision::Daylight);
        assert_eq!(
            eval.status(),
            [
                StatusMessage::SunAltitude(30.0),
                StatusMessage::SunAzimuth(170.0),
                StatusMessage::LampState(false),
            ]
        );
    }

    #[test]
    fn test_evaluation_json() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let eval = Evaluation::new(ts, &Sun::fixed(90.0, 0.0), Decision::Shaded { cloud: 1 });
        let value = serde_json::to_value(&eval).unwrap();

        assert_eq!(value["timestamp"], "2024-06-21T12:00:00Z");
        assert_eq!(value["altitude"], 90.0);
        let z = value["direction"][2].as_f64().unwrap();
        assert!((z - 1.0).abs() < 1e-12, "direction z = {}", z);
        assert_eq!(value["decision"]["reason"], "shaded");
        assert_eq!(value["decision"]["cloud"], 1);
    }

    #[test]
    fn test_decision_json() {
        let json = serde_json::to_string(&Decision::Shaded { cloud: 2 }).unwrap();
        assert_eq!(json, r#"{"reason":"shaded","cloud":2}"#);
    }
}
