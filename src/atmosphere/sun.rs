//! Sun position state.
//!
//! [`Sun`] owns an [`Ephemeris`] and caches the last computed altitude,
//! azimuth and direction. The direction is always derived from the two
//! angles and is never set on its own.

use std::fmt;

use crate::atmosphere::config::SunConfig;
use crate::atmosphere::ephemeris::{Ephemeris, FixedEphemeris, Location, SpaEphemeris};
use crate::core::time::CivilTime;
use crate::core::types::{DVec3, Result, Timestamp};
use crate::math::from_alt_azi;

pub struct Sun {
    ephemeris: Box<dyn Ephemeris>,
    config: SunConfig,
    altitude: f64,
    azimuth: f64,
    direction: DVec3,
}

impl Sun {
    /// Create a sun backed by the given ephemeris. Position fields are zero
    /// until [`calculate_position`](Self::calculate_position) runs.
    pub fn new(ephemeris: Box<dyn Ephemeris>, config: SunConfig) -> Self {
        Self {
            ephemeris,
            config,
            altitude: 0.0,
            azimuth: 0.0,
            direction: DVec3::ZERO,
        }
    }

    /// Sun backed by the NREL SPA ephemeris.
    pub fn spa(config: SunConfig) -> Self {
        let ephemeris = SpaEphemeris {
            elevation: config.elevation,
        };
        Self::new(Box::new(ephemeris), config)
    }

    /// Sun that always sits at the given altitude and azimuth, already
    /// positioned.
    pub fn fixed(altitude: f64, azimuth: f64) -> Self {
        let mut sun = Self::new(
            Box::new(FixedEphemeris::new(altitude, azimuth)),
            SunConfig::default(),
        );
        sun.set_angles(altitude, azimuth);
        sun
    }

    /// Recompute the position for `timestamp` as seen from the given
    /// coordinates.
    pub fn calculate_position(
        &mut self,
        timestamp: Timestamp,
        latitude: f64,
        longitude: f64,
    ) -> Result<()> {
        let time = CivilTime::shifted(timestamp, self.config.hour_offset);
        let location = Location { latitude, longitude };
        let position = self.ephemeris.solar_position(&time, &location)?;

        self.set_angles(position.altitude, position.azimuth_refracted);
        log::debug!(
            "Sun at {:?} from ({}, {}): altitude {:.3}, azimuth {:.3}",
            time,
            latitude,
            longitude,
            self.altitude,
            self.azimuth
        );
        Ok(())
    }

    fn set_angles(&mut self, altitude: f64, azimuth: f64) {
        self.altitude = altitude;
        self.azimuth = azimuth;
        self.direction = from_alt_azi(altitude, azimuth);
    }

    /// Degrees above the horizon.
    #[inline]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Degrees clockwise from north.
    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Unit vector toward the sun (east-north-up).
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Whether the sun is strictly above the horizon.
    #[inline]
    pub fn is_up(&self) -> bool {
        self.altitude > 0.0
    }
}

impl fmt::Debug for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sun")
            .field("altitude", &self.altitude)
            .field("azimuth", &self.azimuth)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
