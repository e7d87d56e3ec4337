//! Sun evaluation settings.

use serde::{Deserialize, Serialize};

/// How the sun position is computed for a timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    /// Hours subtracted from UTC before the calendar fields reach the
    /// ephemeris. Default 3.
    pub hour_offset: i32,
    /// Observer elevation above sea level in meters.
    pub elevation: f64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            hour_offset: 3,
            elevation: 0.0,
        }
    }
}
