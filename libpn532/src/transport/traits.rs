// libpn532/src/transport/traits.rs

//! Transport traits.

use crate::Result;

/// Transport trait abstracts the byte bus away from protocol/device logic.
///
/// Implementations move raw bytes to and from a peer at a 7-bit address.
/// A read either fills the whole buffer or fails; short reads are not a
/// separate outcome.
pub trait Transport {
    /// Write raw bytes to the peer at `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Fill `buffer` with bytes read from the peer at `address`
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read(address, buffer)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read(address, buffer)
    }
}

/// Async counterpart of [`Transport`] for buses driven from a tokio runtime.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncTransport: Send {
    /// Write raw bytes to the peer at `address`
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Fill `buffer` with bytes read from the peer at `address`
    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()>;
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for &mut T {
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data).await
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read(address, buffer).await
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Box<T> {
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data).await
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read(address, buffer).await
    }
}
