// libpn532/src/device/asynchronous.rs

//! Async device session for buses driven from a tokio runtime.
//!
//! Same exchanges as [`Device`](crate::device::Device), but readiness polls
//! sleep on the runtime timer instead of blocking the thread.

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, trace};
use tokio::time::sleep;

use crate::device::config::DeviceConfig;
use crate::device::exchange::{self, DETECTION_RESPONSE_CODE, SCRATCH_LEN};
use crate::device::handle::{Initialized, Uninitialized};
use crate::device::state::{Awaiting, Phase};
use crate::protocol::Command;
use crate::protocol::codec::{self, ACK_READ_LEN};
use crate::protocol::responses;
use crate::transport::AsyncTransport;
use crate::types::{BaudRate, FirmwareVersion, TargetUid};
use crate::utils::{Deadline, HexSlice};
use crate::Result;

/// Async counterpart of [`Device`](crate::device::Device), with the same
/// type-state markers.
pub struct AsyncDevice<T, State = Uninitialized> {
    transport: T,
    config: DeviceConfig,
    buffer: [u8; SCRATCH_LEN],
    phase: Phase,
    _state: PhantomData<State>,
}

impl<T: AsyncTransport> AsyncDevice<T, Uninitialized> {
    /// Create a session with the default configuration.
    pub fn new_with_transport(transport: T) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(transport: T, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            buffer: [0u8; SCRATCH_LEN],
            phase: Phase::Idle,
            _state: PhantomData,
        }
    }

    /// Configure the SAM and move to the initialized state.
    pub async fn initialize(mut self) -> Result<AsyncDevice<T, Initialized>> {
        self.configure_sam().await?;
        Ok(AsyncDevice {
            transport: self.transport,
            config: self.config,
            buffer: self.buffer,
            phase: self.phase,
            _state: PhantomData,
        })
    }
}

impl<T: AsyncTransport, S> AsyncDevice<T, S> {
    /// Retrieve the chip family and firmware version.
    pub async fn get_firmware_version(&mut self, timeout: Duration) -> Result<FirmwareVersion> {
        let frame = self.execute(&Command::GetFirmwareVersion, timeout).await?;
        let version = responses::decode_firmware_version(frame)?;
        debug!("{}", version);
        Ok(version)
    }

    /// Configure the SAM for normal mode.
    pub async fn configure_sam(&mut self) -> Result<()> {
        let timeout = self.config.command_timeout;
        let frame = self.execute(&Command::SAM_NORMAL, timeout).await?;
        responses::check_sam_configuration(frame)?;
        debug!("SAM configured");
        Ok(())
    }

    /// Execute a command and return its raw response frame.
    pub async fn execute(&mut self, cmd: &Command, timeout: Duration) -> Result<&[u8]> {
        let payload = cmd.encode();
        self.send_command(payload.as_slice(), timeout).await?;
        self.read_response(cmd.response_len(), timeout, cmd.response_code())
            .await
    }

    /// Phase reached by the last exchange.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear the session down and hand the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    async fn send_command(&mut self, payload: &[u8], timeout: Duration) -> Result<()> {
        exchange::jump(&mut self.phase, Phase::Sending);
        let n = codec::encode_command_into(payload, &mut self.buffer)?;
        trace!("-> {}", HexSlice(&self.buffer[..n]));
        self.transport
            .write(self.config.address, &self.buffer[..n])
            .await?;

        exchange::advance(&mut self.phase);
        self.wait_ready(Awaiting::Ack, timeout).await?;

        exchange::advance(&mut self.phase);
        self.transport
            .read(self.config.address, &mut self.buffer[..ACK_READ_LEN])
            .await?;
        exchange::check_ack(&self.buffer[..ACK_READ_LEN])?;

        exchange::advance(&mut self.phase);
        Ok(())
    }

    async fn read_response(
        &mut self,
        len: usize,
        timeout: Duration,
        response_code: u8,
    ) -> Result<&[u8]> {
        exchange::check_response_len(len)?;
        self.wait_ready(Awaiting::Response, timeout).await?;

        exchange::advance(&mut self.phase);
        self.transport
            .read(self.config.address, &mut self.buffer[..len + 1])
            .await?;
        let frame = exchange::checked_response(
            &self.buffer[..len + 1],
            len,
            response_code,
            self.config.verify_checksums,
        )?;
        exchange::advance(&mut self.phase);
        Ok(frame)
    }

    async fn wait_ready(&mut self, awaiting: Awaiting, timeout: Duration) -> Result<()> {
        let deadline = Deadline::after(timeout);
        let interval = exchange::poll_interval(&self.config);
        let mut status = [0u8; 1];
        let mut polls = 0u32;
        loop {
            polls += 1;
            let poll = self.transport.read(self.config.address, &mut status).await;
            if exchange::is_ready(poll, status[0], awaiting, polls) {
                return Ok(());
            }
            if deadline.expired() {
                return Err(exchange::timed_out(awaiting, polls));
            }
            sleep(deadline.next_sleep(interval)).await;
        }
    }
}

impl<T: AsyncTransport> AsyncDevice<T, Initialized> {
    /// Configure the SAM, then start detection of one target at
    /// `baud_rate`. Only the acknowledgement is awaited.
    pub async fn start_passive_target_detection(&mut self, baud_rate: BaudRate) -> Result<()> {
        self.configure_sam().await?;

        let cmd = Command::detect_one(baud_rate);
        let timeout = self.config.command_timeout;
        self.send_command(cmd.encode().as_slice(), timeout).await?;
        exchange::jump(&mut self.phase, Phase::Done);
        debug!("passive target detection started at {}", baud_rate);
        Ok(())
    }

    /// Read the result of a pending detection without sending a command.
    pub async fn read_detected_target(&mut self, timeout: Duration) -> Result<Option<TargetUid>> {
        let len = exchange::detection_read_len(&self.config);
        exchange::jump(&mut self.phase, Phase::AwaitingReady(Awaiting::Response));
        let frame = self
            .read_response(len, timeout, DETECTION_RESPONSE_CODE)
            .await?;
        let uid = responses::decode_passive_target(frame)?;
        match &uid {
            Some(uid) => debug!("target detected: {}", uid),
            None => trace!("no target in field"),
        }
        Ok(uid)
    }

    /// Start detection and wait up to `timeout` for its result.
    pub async fn poll_target(
        &mut self,
        baud_rate: BaudRate,
        timeout: Duration,
    ) -> Result<Option<TargetUid>> {
        self.start_passive_target_detection(baud_rate).await?;
        self.read_detected_target(timeout).await
    }
}
