// libpn532/src/device/mod.rs

//! Device session: the command/ack/response state machine over a
//! [`Transport`](crate::transport::Transport).

pub mod builder;
pub mod config;
mod exchange;
pub mod handle;
pub mod state;

/// Tokio flavour of the session.
#[cfg(feature = "async")]
pub mod asynchronous;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::{Device, Initialized, Uninitialized};
pub use state::{Awaiting, Phase};

#[cfg(feature = "async")]
pub use asynchronous::AsyncDevice;
