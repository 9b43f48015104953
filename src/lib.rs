//! Control driver for Attero Tech unD6IO-BT class Bluetooth audio
//! endpoints.
//!
//! The host AV-control framework owns the sockets and the dispatch
//! routing; this crate is the layer in between. It encodes abstract
//! operations (clear pairings, start/stop pairing, status, device name,
//! now-playing metadata) into the device's line-based ASCII command
//! protocol, parses the terse acknowledgement lines back into typed
//! state, and wraps each transaction in a bounded retry policy.
//!
//! Every operation borrows a live [`LineTransport`] connection and a
//! [`DiagnosticSink`] capability, and returns an [`Outcome`]: the host
//! always gets a value it can surface, degraded to a typed fallback
//! when the device could not answer.

pub mod config;
pub mod diag;
pub mod driver;
pub mod error;
pub mod outcome;
pub mod protocol;
pub mod retry;
pub mod transport;

pub use crate::{
   config::Config,
   diag::{DiagnosticSink, ErrorLog},
   driver::Driver,
   error::{DriverError, Result},
   outcome::Outcome,
   protocol::{Command, Confirmation, LinkStatus, PairingState},
   retry::RetryPolicy,
   transport::LineTransport,
};
