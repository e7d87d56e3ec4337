//! Solar ephemeris: civil time and location in, altitude and azimuth out.

use chrono::{TimeZone, Utc};
use solar_positioning::{RefractionCorrection, spa, time::DeltaT};

use crate::core::error::Error;
use crate::core::time::CivilTime;
use crate::core::types::Result;

/// Fallback ΔT (TT - UT) in seconds when no estimate is available.
const DEFAULT_DELTA_T: f64 = 69.184;

/// Observer position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ephemeris output, degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolarPosition {
    /// Geometric angle above the horizon, negative below. Not corrected
    /// for refraction.
    pub altitude: f64,
    /// Clockwise from north, after refraction correction.
    pub azimuth_refracted: f64,
}

/// Source of solar positions.
///
/// Implementations must be deterministic and free of side effects; the
/// returned values are used without further validation.
pub trait Ephemeris: Send + Sync {
    fn solar_position(&self, time: &CivilTime, location: &Location) -> Result<SolarPosition>;
}

/// NREL Solar Position Algorithm via the `solar-positioning` crate.
/// Civil time fields are read as UTC.
///
/// Altitude is taken from the uncorrected position and azimuth from the
/// refraction-corrected one.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpaEphemeris {
    /// Observer elevation above sea level in meters.
    pub elevation: f64,
}

impl SpaEphemeris {
    /// Elevation and azimuth in degrees.
    fn angles(
        &self,
        time: &CivilTime,
        location: &Location,
        correction: Option<RefractionCorrection>,
    ) -> Result<(f64, f64)> {
        let datetime = Utc
            .with_ymd_and_hms(time.year, time.month, time.day, time.hour, time.minute, time.second)
            .single()
            .ok_or_else(|| Error::Ephemeris(format!("invalid civil time {:?}", time)))?
            .fixed_offset();

        let delta_t = DeltaT::estimate_from_date_like(datetime).unwrap_or(DEFAULT_DELTA_T);

        let position = spa::solar_position(
            datetime,
            location.latitude,
            location.longitude,
            self.elevation,
            delta_t,
            correction,
        )
        .map_err(|e| Error::Ephemeris(format!("{:?}: {}", location, e)))?;

        Ok((position.elevation_angle(), position.azimuth()))
    }
}

impl Ephemeris for SpaEphemeris {
    fn solar_position(&self, time: &CivilTime, location: &Location) -> Result<SolarPosition> {
        let (altitude, _) = self.angles(time, location, None)?;
        let (_, azimuth) = self.angles(time, location, Some(RefractionCorrection::standard()))?;

        Ok(SolarPosition {
            altitude,
            azimuth_refracted: azimuth,
        })
    }
}

/// Ephemeris that always reports the same position.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedEphemeris {
    pub position: SolarPosition,
}

impl FixedEphemeris {
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Self {
            position: SolarPosition {
                altitude,
                azimuth_refracted: azimuth,
            },
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn solar_position(&self, _: &CivilTime, _: &Location) -> Result<SolarPosition> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(year: i32, month: u32, day: u32, hour: u32) -> CivilTime {
        CivilTime { year, month, day, hour, minute: 0, second: 0 }
    }

    #[test]
    fn test_spa_summer_noon_vienna() {
        // Solar noon in Vienna is close to 11:00 UTC in June
        let pos = SpaEphemeris::default()
            .solar_position(
                &civil(2024, 6, 21, 11),
                &Location { latitude: 48.21, longitude: 16.37 },
            )
            .unwrap();
        assert!(
            (pos.altitude - 65.2).abs() < 1.0,
            "altitude = {} expected ~65.2",
            pos.altitude
        );
        assert!(
            (pos.azimuth_refracted - 180.0).abs() < 10.0,
            "azimuth = {} expected near south",
            pos.azimuth_refracted
        );
    }

    #[test]
    fn test_spa_midnight_below_horizon() {
        let pos = SpaEphemeris::default()
            .solar_position(
                &civil(2024, 12, 21, 23),
                &Location { latitude: 48.21, longitude: 16.37 },
            )
            .unwrap();
        assert!(pos.altitude < -30.0, "altitude = {} should be well below", pos.altitude);
    }

    #[test]
    fn test_spa_rejects_invalid_date() {
        let result = SpaEphemeris::default().solar_position(
            &civil(2024, 2, 30, 12),
            &Location::default(),
        );
        assert!(matches!(result, Err(Error::Ephemeris(_))));
    }

    #[test]
    fn test_spa_rejects_invalid_latitude() {
        let result = SpaEphemeris::default().solar_position(
            &civil(2024, 6, 21, 12),
            &Location { latitude: 120.0, longitude: 0.0 },
        );
        assert!(matches!(result, Err(Error::Ephemeris(_))));
    }

    #[test]
    fn test_altitude_is_not_refracted_at_sunset() {
        // Moscow just after geometric sunset; refraction would still show
        // the sun above the horizon.
        let ephemeris = SpaEphemeris::default();
        let location = Location { latitude: 55.75, longitude: 37.62 };
        for minute in [10, 12, 14] {
            let time = CivilTime { year: 2024, month: 6, day: 21, hour: 18, minute, second: 0 };
            let pos = ephemeris.solar_position(&time, &location).unwrap();

            let (geometric, _) = ephemeris.angles(&time, &location, None).unwrap();
            let (apparent, azimuth) = ephemeris
                .angles(&time, &location, Some(RefractionCorrection::standard()))
                .unwrap();

            assert_eq!(pos.altitude, geometric, "18:{} altitude", minute);
            assert_eq!(pos.azimuth_refracted, azimuth, "18:{} azimuth", minute);
            assert!(pos.altitude <= 0.0, "18:{} altitude {} should be below", minute, pos.altitude);
            assert!(apparent > 0.0, "18:{} apparent {} should be above", minute, apparent);
        }
    }

    #[test]
    fn test_fixed_ephemeris() {
        let pos = FixedEphemeris::new(30.0, 90.0)
            .solar_position(&civil(2000, 1, 1, 0), &Location::default())
            .unwrap();
        assert_eq!(pos.altitude, 30.0);
        assert_eq!(pos.azimuth_refracted, 90.0);
    }
}
