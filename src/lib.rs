//! Flowerlamp - switches a lamp on when the sun is down or a cloud shades it

pub mod core;
pub mod math;
pub mod atmosphere;
pub mod lamp;
pub mod config;
pub mod input;
pub mod export;
