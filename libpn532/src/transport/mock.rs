// libpn532/src/transport/mock.rs

//! Scripted in-memory transport for tests.

use std::collections::VecDeque;

use crate::constants::{PN532_ACK_FRAME, PN532_I2C_READY};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// queued reads.
///
/// One-byte reads are readiness polls and are answered from a separate
/// readiness script; once the script runs dry every poll gets
/// `idle_status` (ready by default). Longer reads pop the next queued read,
/// zero padded or truncated to the requested length like a fixed-size I2C
/// transfer.
#[derive(Debug)]
pub struct MockTransport {
    /// Every write, with its address
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Queued data reads, readiness byte included
    pub reads: VecDeque<Vec<u8>>,
    /// Scripted readiness statuses, served before `idle_status`
    pub readiness: VecDeque<u8>,
    /// Status returned once the script is exhausted
    pub idle_status: u8,
    /// Number of readiness polls served so far
    pub polls: usize,
    /// Testing hook: number of upcoming writes that fail with an I/O error
    pub write_failures: usize,
    /// Testing hook: number of upcoming data reads that fail with an I/O error
    pub read_failures: usize,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// A device that is always ready and has nothing queued.
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            reads: VecDeque::new(),
            readiness: VecDeque::new(),
            idle_status: PN532_I2C_READY,
            polls: 0,
            write_failures: 0,
            read_failures: 0,
        }
    }

    /// A device that never reports readiness.
    pub fn never_ready() -> Self {
        Self {
            idle_status: 0x00,
            ..Self::new()
        }
    }

    /// Queue a raw read, served verbatim (readiness byte included).
    pub fn push_read(&mut self, raw: Vec<u8>) {
        self.reads.push_back(raw);
    }

    /// Queue an ACK read: readiness byte followed by the ACK frame.
    pub fn push_ack(&mut self) {
        let mut raw = vec![PN532_I2C_READY];
        raw.extend_from_slice(&PN532_ACK_FRAME);
        self.push_read(raw);
    }

    /// Queue a response frame behind a readiness byte.
    pub fn push_response(&mut self, frame: &[u8]) {
        let mut raw = Vec::with_capacity(frame.len() + 1);
        raw.push(PN532_I2C_READY);
        raw.extend_from_slice(frame);
        self.push_read(raw);
    }

    /// Script the next readiness polls, e.g. `[0x00, 0x00, 0x01]` for a
    /// device that becomes ready on the third poll.
    pub fn script_readiness(&mut self, statuses: &[u8]) {
        self.readiness.extend(statuses.iter().copied());
    }

    /// Fail the next `n` writes.
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Fail the next `n` data reads.
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Frames written so far, without their addresses.
    pub fn written_frames(&self) -> Vec<&[u8]> {
        self.writes.iter().map(|(_, f)| f.as_slice()).collect()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Io("simulated write failure".into()));
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, buffer: &mut [u8]) -> Result<()> {
        if buffer.len() == 1 {
            self.polls += 1;
            buffer[0] = self.readiness.pop_front().unwrap_or(self.idle_status);
            return Ok(());
        }

        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Io("simulated read failure".into()));
        }

        let raw = self
            .reads
            .pop_front()
            .ok_or_else(|| Error::Io("no queued read".into()))?;
        let n = raw.len().min(buffer.len());
        buffer[..n].copy_from_slice(&raw[..n]);
        buffer[n..].fill(0);
        Ok(())
    }
}

// Nothing in the mock blocks, so the async flavour reuses the sync paths.
#[cfg(feature = "async")]
#[async_trait::async_trait]
impl crate::transport::traits::AsyncTransport for MockTransport {
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        Transport::write(self, address, data)
    }

    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<()> {
        Transport::read(self, address, buffer)
    }
}
