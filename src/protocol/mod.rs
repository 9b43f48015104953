//! Wire protocol definitions for the Bluetooth audio endpoint.
//!
//! This module contains the command mnemonics understood by the device
//! firmware and the typed states derived from its acknowledgement lines.

pub mod parser;

use smol_str::{SmolStr, format_smolstr};

/// Sentinel payload surfaced when the device has no real answer.
pub const UNKNOWN: &str = "unknown";

/// Marker substring of a negative acknowledgement line.
pub const NACK: &str = "NACK";

/// Commands understood by the endpoint firmware.
///
/// Each command is a literal mnemonic with no parameters, transmitted as
/// `<MNEMONIC>\r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum Command {
   /// Clear all stored Bluetooth pairings.
   #[strum(serialize = "CBC")]
   ClearPairings,
   /// Enter pairing / discoverable mode.
   #[strum(serialize = "BTB")]
   BeginPairing,
   /// Drop the active connection and leave pairing mode.
   #[strum(serialize = "BCC")]
   Disconnect,
   /// Query the Bluetooth link status.
   #[strum(serialize = "BTS")]
   QueryStatus,
   /// Query the name of the connected device.
   #[strum(serialize = "BTCDN")]
   QueryDeviceName,
   /// Query the title of the current track.
   #[strum(serialize = "BTSONG")]
   QuerySongName,
   /// Query the artist of the current track.
   #[strum(serialize = "BTARTIST")]
   QueryArtistName,
}

impl Command {
   pub fn mnemonic(self) -> &'static str {
      self.into()
   }

   /// Full wire line for this command, `<CR>` terminator included.
   ///
   /// The firmware silently ignores unterminated commands, so the
   /// terminator is appended here rather than by the transport.
   pub fn encode(self) -> SmolStr {
      format_smolstr!("{}\r", self.mnemonic())
   }
}

/// Bluetooth link status as reported to the host framework.
///
/// `Unknown` is never produced by parsing a reply; it is the degraded
/// fallback when no valid status could be obtained.
#[derive(
   Debug,
   Clone,
   Copy,
   PartialEq,
   Eq,
   strum::Display,
   strum::IntoStaticStr,
   strum::EnumString,
)]
pub enum LinkStatus {
   #[strum(serialize = "IDLE")]
   Idle,
   #[strum(serialize = "DISCOVERABLE")]
   Discoverable,
   #[strum(serialize = "CONNECTED")]
   Connected,
   #[strum(serialize = "unknown")]
   Unknown,
}

impl LinkStatus {
   /// Maps the numeric code of an `ACK BTS n` reply.
   ///
   /// Codes 2 through 5 are distinct connected sub-states on the wire but
   /// collapse to a single host-visible state.
   pub fn from_code(code: u8) -> Option<Self> {
      match code {
         0 => Some(Self::Idle),
         1 => Some(Self::Discoverable),
         2..=5 => Some(Self::Connected),
         _ => None,
      }
   }

   /// Derives the pairing flag: discoverable or connected counts as
   /// actively pairing, idle does not.
   pub fn pairing_state(self) -> PairingState {
      match self {
         Self::Discoverable | Self::Connected => PairingState::Engaged,
         Self::Idle => PairingState::Disengaged,
         Self::Unknown => PairingState::Unknown,
      }
   }

   pub fn to_str(self) -> &'static str {
      self.into()
   }
}

/// Pairing flag surfaced by the host framework's pairing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum PairingState {
   #[strum(serialize = "true")]
   Engaged,
   #[strum(serialize = "false")]
   Disengaged,
   #[strum(serialize = "unknown")]
   Unknown,
}

impl PairingState {
   pub fn to_str(self) -> &'static str {
      self.into()
   }
}

/// Result of a set-style command as surfaced to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum Confirmation {
   #[strum(serialize = "ok")]
   Confirmed,
   #[strum(serialize = "notok")]
   Failed,
}

impl Confirmation {
   pub fn to_str(self) -> &'static str {
      self.into()
   }
}
