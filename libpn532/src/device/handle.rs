// libpn532/src/device/handle.rs

//! Blocking device session.

use std::marker::PhantomData;
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::device::config::DeviceConfig;
use crate::device::exchange::{self, DETECTION_RESPONSE_CODE, SCRATCH_LEN};
use crate::device::state::{Awaiting, Phase};
use crate::protocol::Command;
use crate::protocol::codec::{self, ACK_READ_LEN};
use crate::protocol::responses;
use crate::transport::Transport;
use crate::types::{BaudRate, FirmwareVersion, TargetUid};
use crate::utils::{Deadline, HexSlice};
use crate::Result;

/// Type-state marker: SAM not configured yet.
pub struct Uninitialized;
/// Type-state marker: SAM configured, detection available.
pub struct Initialized;

/// Device session that enforces SAM configuration at compile time.
///
/// The session owns its transport and a fixed scratch buffer; each
/// operation runs one command/ack/response exchange to completion and
/// blocks the caller until it succeeds, fails or times out.
pub struct Device<T, State = Uninitialized> {
    transport: T,
    config: DeviceConfig,
    buffer: [u8; SCRATCH_LEN],
    phase: Phase,
    _state: PhantomData<State>,
}

impl<T: Transport> Device<T, Uninitialized> {
    /// Create a Device from an existing Transport instance using the
    /// default configuration.
    pub fn new_with_transport(transport: T) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Create a Device with an explicit configuration.
    pub fn with_config(transport: T, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            buffer: [0u8; SCRATCH_LEN],
            phase: Phase::Idle,
            _state: PhantomData,
        }
    }

    /// Initialize the device (SAM configuration in normal mode). Returns an
    /// initialized Device on success.
    pub fn initialize(mut self) -> Result<Device<T, Initialized>> {
        self.configure_sam()?;
        Ok(self.into_state())
    }
}

impl<T: Transport, S> Device<T, S> {
    /// Retrieve the chip family and firmware version.
    pub fn get_firmware_version(&mut self, timeout: Duration) -> Result<FirmwareVersion> {
        let frame = self.execute(&Command::GetFirmwareVersion, timeout)?;
        let version = responses::decode_firmware_version(frame)?;
        debug!("{}", version);
        Ok(version)
    }

    /// Configure the SAM for normal mode (no SAM, 1 s virtual card timeout).
    pub fn configure_sam(&mut self) -> Result<()> {
        let timeout = self.config.command_timeout;
        let frame = self.execute(&Command::SAM_NORMAL, timeout)?;
        responses::check_sam_configuration(frame)?;
        debug!("SAM configured");
        Ok(())
    }

    /// Execute a command and return its raw response frame (readiness byte
    /// removed). `timeout` bounds each of the two readiness waits.
    pub fn execute(&mut self, cmd: &Command, timeout: Duration) -> Result<&[u8]> {
        let payload = cmd.encode();
        self.send_command(payload.as_slice(), timeout)?;
        self.read_response(cmd.response_len(), timeout, cmd.response_code())
    }

    /// Phase reached by the last exchange. After a failure this is the
    /// phase the exchange failed in.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear the session down and hand the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    fn into_state<N>(self) -> Device<T, N> {
        Device {
            transport: self.transport,
            config: self.config,
            buffer: self.buffer,
            phase: self.phase,
            _state: PhantomData,
        }
    }

    /// Frame `payload`, write it and wait for the PN532 to acknowledge it.
    /// Leaves the session awaiting readiness for the response.
    fn send_command(&mut self, payload: &[u8], timeout: Duration) -> Result<()> {
        exchange::jump(&mut self.phase, Phase::Sending);
        let n = codec::encode_command_into(payload, &mut self.buffer)?;
        trace!("-> {}", HexSlice(&self.buffer[..n]));
        self.transport.write(self.config.address, &self.buffer[..n])?;

        exchange::advance(&mut self.phase);
        self.wait_ready(Awaiting::Ack, timeout)?;

        exchange::advance(&mut self.phase);
        self.transport
            .read(self.config.address, &mut self.buffer[..ACK_READ_LEN])?;
        exchange::check_ack(&self.buffer[..ACK_READ_LEN])?;

        exchange::advance(&mut self.phase);
        Ok(())
    }

    /// Wait for the next response and return its `len` frame bytes.
    fn read_response(&mut self, len: usize, timeout: Duration, response_code: u8) -> Result<&[u8]> {
        exchange::check_response_len(len)?;
        self.wait_ready(Awaiting::Response, timeout)?;

        exchange::advance(&mut self.phase);
        self.transport
            .read(self.config.address, &mut self.buffer[..len + 1])?;
        let frame = exchange::checked_response(
            &self.buffer[..len + 1],
            len,
            response_code,
            self.config.verify_checksums,
        )?;
        exchange::advance(&mut self.phase);
        Ok(frame)
    }

    /// Poll the readiness byte until it reads ready or `timeout` elapses.
    fn wait_ready(&mut self, awaiting: Awaiting, timeout: Duration) -> Result<()> {
        let deadline = Deadline::after(timeout);
        let interval = exchange::poll_interval(&self.config);
        let mut status = [0u8; 1];
        let mut polls = 0u32;
        loop {
            polls += 1;
            let poll = self.transport.read(self.config.address, &mut status);
            if exchange::is_ready(poll, status[0], awaiting, polls) {
                return Ok(());
            }
            if deadline.expired() {
                return Err(exchange::timed_out(awaiting, polls));
            }
            thread::sleep(deadline.next_sleep(interval));
        }
    }
}

impl<T: Transport> Device<T, Initialized> {
    /// Put the PN532 in passive-target detection for one target at
    /// `baud_rate`. Only the acknowledgement is awaited; collect the result
    /// with [`Device::read_detected_target`].
    pub fn start_passive_target_detection(&mut self, baud_rate: BaudRate) -> Result<()> {
        self.configure_sam()?;

        let cmd = Command::detect_one(baud_rate);
        let timeout = self.config.command_timeout;
        self.send_command(cmd.encode().as_slice(), timeout)?;
        exchange::jump(&mut self.phase, Phase::Done);
        debug!("passive target detection started at {}", baud_rate);
        Ok(())
    }

    /// Read the result of a pending detection without sending a command.
    /// `Ok(None)` means no single target was in the field; callers are
    /// expected to retry.
    pub fn read_detected_target(&mut self, timeout: Duration) -> Result<Option<TargetUid>> {
        let len = exchange::detection_read_len(&self.config);
        exchange::jump(&mut self.phase, Phase::AwaitingReady(Awaiting::Response));
        let frame = self.read_response(len, timeout, DETECTION_RESPONSE_CODE)?;
        let uid = responses::decode_passive_target(frame)?;
        match &uid {
            Some(uid) => debug!("target detected: {}", uid),
            None => trace!("no target in field"),
        }
        Ok(uid)
    }

    /// Start detection and wait up to `timeout` for its result.
    pub fn poll_target(&mut self, baud_rate: BaudRate, timeout: Duration) -> Result<Option<TargetUid>> {
        self.start_passive_target_detection(baud_rate)?;
        self.read_detected_target(timeout)
    }
}
