//! Error types for the Bluetooth endpoint driver.
//!
//! This module defines all error types that can occur while translating
//! host operations into the device's line protocol, including transport,
//! protocol, and configuration errors.

use smol_str::SmolStr;
use thiserror::Error;

/// Main error type for the endpoint driver.
#[derive(Error, Debug)]
pub enum DriverError {
   /// The transport failed to transmit the command line.
   #[error("failed to send {command} to device")]
   SendFailed { command: &'static str },

   /// The transport returned a blank line, i.e. a read failure or timeout.
   #[error("empty response from device")]
   EmptyResponse,

   /// The device answered with an explicit negative acknowledgement.
   #[error("device rejected command: {response}")]
   CommandRejected { response: SmolStr },

   /// A status reply carried a code outside the documented 0-5 range,
   /// or no code at all.
   #[error("invalid status code in response: {response}")]
   InvalidStatusCode { response: SmolStr },

   /// The retry budget was exhausted; wraps the failure of the last attempt.
   #[error("retries exhausted after {attempts} attempts: {last}")]
   RetryExhausted {
      attempts: u32,
      last: Box<DriverError>,
   },

   #[error("I/O error: {0}")]
   Io(#[from] std::io::Error),

   #[error("could not determine config directory")]
   ConfigDirNotFound,

   #[error("TOML parsing error: {0}")]
   TomlParse(#[from] toml::de::Error),

   #[error("TOML serialization error: {0}")]
   TomlSerialize(#[from] toml::ser::Error),
}

impl DriverError {
   /// Whether a retry may plausibly succeed.
   ///
   /// Transport faults are transient; an explicit rejection or a
   /// malformed status reply is definitive and must surface immediately.
   pub fn is_transient(&self) -> bool {
      matches!(self, Self::SendFailed { .. } | Self::EmptyResponse)
   }
}

/// Convenience type alias for Results with `DriverError`.
pub type Result<T> = std::result::Result<T, DriverError>;
