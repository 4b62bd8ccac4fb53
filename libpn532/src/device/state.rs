// libpn532/src/device/state.rs

//! Phases of a single command/ack/response exchange.
//!
//! A session walks `Idle -> Sending -> AwaitingReady(Ack) -> AwaitingAck ->
//! AwaitingReady(Response) -> AwaitingResponse -> Done` once per command.
//! Failures are terminal for the exchange and surface as [`crate::Error`].

use derive_more::Display;

/// What a readiness wait is waiting for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Awaiting {
    /// The ACK frame that follows a command
    #[display(fmt = "ack")]
    Ack,
    /// The response frame
    #[display(fmt = "response")]
    Response,
}

/// Where a session stands in its current exchange.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No exchange started yet
    #[display(fmt = "idle")]
    Idle,
    /// Command frame being written
    #[display(fmt = "sending")]
    Sending,
    /// Polling the readiness byte
    #[display(fmt = "awaiting ready ({})", _0)]
    AwaitingReady(Awaiting),
    /// Reading the ACK frame
    #[display(fmt = "awaiting ack")]
    AwaitingAck,
    /// Reading the response frame
    #[display(fmt = "awaiting response")]
    AwaitingResponse,
    /// Exchange finished
    #[display(fmt = "done")]
    Done,
}

impl Phase {
    /// The phase that follows a successful step. `Done` wraps to `Idle`.
    ///
    /// Detection reads skip the command half and enter at
    /// `AwaitingReady(Response)`.
    pub fn next(self) -> Self {
        match self {
            Phase::Idle => Phase::Sending,
            Phase::Sending => Phase::AwaitingReady(Awaiting::Ack),
            Phase::AwaitingReady(Awaiting::Ack) => Phase::AwaitingAck,
            Phase::AwaitingAck => Phase::AwaitingReady(Awaiting::Response),
            Phase::AwaitingReady(Awaiting::Response) => Phase::AwaitingResponse,
            Phase::AwaitingResponse => Phase::Done,
            Phase::Done => Phase::Idle,
        }
    }
}
