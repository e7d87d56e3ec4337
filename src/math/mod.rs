//! Geometry helpers for sun directions and shadow footprints

pub mod direction;
pub mod footprint;

pub use direction::{cos_angle, from_alt_azi};
pub use footprint::Footprint;
