//! Sun and cloud model.
//!
//! [`Sun`] turns a timestamp and observer position into altitude, azimuth
//! and a direction vector through an [`Ephemeris`]. [`Cloud`] uses that
//! direction to place its shadow on the ground.

pub mod cloud;
pub mod config;
pub mod ephemeris;
pub mod sun;

// Re-exports
pub use cloud::Cloud;
pub use config::SunConfig;
pub use ephemeris::{Ephemeris, FixedEphemeris, Location, SolarPosition, SpaEphemeris};
pub use sun::Sun;
