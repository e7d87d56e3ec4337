//! Shadow-casting cloud boxes.

use serde::{Deserialize, Serialize};

use crate::atmosphere::sun::Sun;
use crate::core::types::{DVec2, DVec3};
use crate::math::Footprint;

/// Axis-aligned box centered at (`longitude`, `latitude`) floating at
/// `height` above the ground. Widths are in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub longitude: f64,
    pub latitude: f64,
    /// Extent along longitude.
    pub x_width: f64,
    /// Extent along latitude.
    pub y_width: f64,
    pub height: f64,
}

impl Cloud {
    pub fn new(longitude: f64, latitude: f64, x_width: f64, y_width: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            x_width,
            y_width,
            height,
        }
    }

    /// Translate the cloud by the given deltas.
    pub fn move_by(&mut self, d_longitude: f64, d_latitude: f64) {
        self.longitude += d_longitude;
        self.latitude += d_latitude;
    }

    /// Rectangle directly below the cloud.
    pub fn footprint(&self) -> Footprint {
        Footprint::from_center_size(
            DVec2::new(self.longitude, self.latitude),
            DVec2::new(self.x_width, self.y_width),
        )
    }

    /// Horizontal displacement of the shadow from the point below the cloud.
    ///
    /// Follows the sun ray down from cloud height to the ground; the shadow
    /// lands on the side opposite the sun. `z` is always 0.
    ///
    /// Only meaningful while `sun.is_up()`: at altitude 0 the distance is
    /// infinite and below the horizon the result has no physical sense.
    pub fn shadow_offset(&self, sun: &Sun) -> DVec3 {
        let distance = self.height / sun.altitude().to_radians().sin();
        let ray = sun.direction().normalize() * distance;
        DVec3::new(-ray.x, -ray.y, 0.0)
    }

    /// Rectangle of the shadow on the ground. Same precondition as
    /// [`shadow_offset`](Self::shadow_offset).
    pub fn shadow_footprint(&self, sun: &Sun) -> Footprint {
        self.footprint().translated(self.shadow_offset(sun).truncate())
    }
}
