//! Lamp on/off decision engine.
//!
//! A [`Lamp`] is evaluated against one [`Sun`] and any number of
//! [`Cloud`]s:
//! - sun at or below the horizon: on
//! - sun up and the lamp inside any cloud's shadow: on
//! - sun up and no shadow: off
//!
//! The shadow test is only run while the sun is strictly above the horizon,
//! which keeps [`Cloud::shadow_offset`] away from its degenerate range.

pub mod decision;

pub use decision::{Decision, Evaluation};

use crate::atmosphere::{Cloud, Sun};
use crate::core::types::{DVec2, Result, Timestamp};

/// A light fixture at a fixed position.
#[derive(Clone, Debug, Default)]
pub struct Lamp {
    pub latitude: f64,
    pub longitude: f64,
    /// Written only by `update`.
    is_on: bool,
}

impl Lamp {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            is_on: false,
        }
    }

    /// Ground position as (longitude, latitude).
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Whether the lamp lies inside the shadow `cloud` casts under `sun`.
    /// Edges count as inside. Requires `sun.is_up()`.
    pub fn is_under_shadow(&self, cloud: &Cloud, sun: &Sun) -> bool {
        cloud.shadow_footprint(sun).contains_point(self.position())
    }

    /// Decide against an already positioned sun without touching state.
    /// The first shading cloud in order is reported.
    pub fn decide(&self, sun: &Sun, clouds: &[Cloud]) -> Decision {
        if !sun.is_up() {
            return Decision::Night;
        }
        clouds
            .iter()
            .position(|cloud| self.is_under_shadow(cloud, sun))
            .map_or(Decision::Daylight, |cloud| Decision::Shaded { cloud })
    }

    /// Position `sun` for `timestamp` at the lamp's own coordinates, decide,
    /// and store the new state. On ephemeris failure the state is left as is.
    pub fn evaluate(
        &mut self,
        timestamp: Timestamp,
        sun: &mut Sun,
        clouds: &[Cloud],
    ) -> Result<Evaluation> {
        sun.calculate_position(timestamp, self.latitude, self.longitude)?;
        let decision = self.decide(sun, clouds);
        self.is_on = decision.lamp_on();
        log::debug!("Lamp at ({}, {}): {:?}", self.latitude, self.longitude, decision);
        Ok(Evaluation::new(timestamp, sun, decision))
    }

    /// Like [`evaluate`](Self::evaluate) but only returns the new state.
    pub fn update(&mut self, timestamp: Timestamp, sun: &mut Sun, clouds: &[Cloud]) -> Result<bool> {
        self.evaluate(timestamp, sun, clouds).map(|eval| eval.lamp_on())
    }

    /// Last computed state; false before the first update.
    #[inline]
    pub fn state(&self) -> bool {
        self.is_on
    }

    /// Log the state computed by the last update. Does not re-evaluate.
    pub fn describe(&self) {
        log::info!("Lamp on: {}", u8::from(self.is_on));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
