//! Status link for flowerlamp - publishes lamp status over MQTT
//!
//! Start the link inside a tokio runtime:
//! ```ignore
//! let link = StatusLink::start(&LinkConfig::default(), LogHandler);
//! link.publish(&StatusMessage::LampState(true)).await?;
//! link.shutdown().await;
//! ```

pub mod client;
pub mod config;
pub mod protocol;

pub use client::{InboundHandler, LogHandler, StatusLink};
pub use config::{LinkConfig, Qos};
pub use protocol::*;

use thiserror::Error;

/// Default broker port
pub const DEFAULT_PORT: u16 = 1883;

/// Errors raised by the status link
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("MQTT client error: {0}")]
    Client(#[from] rumqttc::ClientError),

    #[error("Status link is shut down")]
    Closed,
}
