// libpn532/src/transport/mod.rs

//! Byte bus abstraction and its implementations.

#[cfg(feature = "hal")]
pub mod hal;
#[cfg(feature = "i2c")]
pub mod i2c;
pub mod mock;
pub mod traits;

#[cfg(feature = "hal")]
pub use hal::HalTransport;
#[cfg(feature = "i2c")]
pub use i2c::LinuxI2cTransport;
pub use mock::MockTransport;
#[cfg(feature = "async")]
pub use traits::AsyncTransport;
pub use traits::Transport;
