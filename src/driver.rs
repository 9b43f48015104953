//! Operation layer of the endpoint driver.
//!
//! Each host-facing get/set operation runs one or more
//! encode-send-receive-parse transactions on a borrowed connection,
//! under the configured retry budget where the operation warrants it.
//! The driver keeps no state between calls; everything it touches lives
//! for a single request/response cycle.

use log::{debug, warn};
use smol_str::{SmolStr, format_smolstr};

use crate::{
   config::Config,
   diag::DiagnosticSink,
   error::{DriverError, Result},
   outcome::Outcome,
   protocol::{Command, Confirmation, LinkStatus, NACK, PairingState, UNKNOWN, parser},
   retry::RetryPolicy,
   transport::LineTransport,
};

/// Stateless protocol translator for one endpoint model.
///
/// A single instance can serve any number of connections; operations
/// borrow the connection and the diagnostic sink per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Driver {
   retry: RetryPolicy,
}

impl Driver {
   pub fn new(retry: RetryPolicy) -> Self {
      Self { retry }
   }

   pub fn from_config(config: &Config) -> Self {
      Self::new(config.retry)
   }

   pub fn retry_policy(&self) -> RetryPolicy {
      self.retry
   }

   /// Clears all stored Bluetooth pairings.
   ///
   /// Clearing is only ever requested, never undone, so `enabled = false`
   /// transmits nothing and confirms immediately.
   pub async fn clear_pairings<T, S>(&self, link: &mut T, diag: &S, enabled: bool) -> Outcome<Confirmation>
   where
      T: LineTransport,
      S: DiagnosticSink + ?Sized,
   {
      if !enabled {
         return Outcome::Ok(Confirmation::Confirmed);
      }

      let result = self
         .retry
         .run(async || acknowledge(&mut *link, Command::ClearPairings).await)
         .await;
      match result {
         Ok(confirmation) => Outcome::Ok(confirmation),
         Err(error) => degraded(diag, "clear_pairings", Confirmation::Failed, error),
      }
   }

   /// Enters pairing mode, or drops the connection and leaves it.
   pub async fn set_pairing<T, S>(&self, link: &mut T, diag: &S, enabled: bool) -> Outcome<Confirmation>
   where
      T: LineTransport,
      S: DiagnosticSink + ?Sized,
   {
      let command = if enabled {
         Command::BeginPairing
      } else {
         Command::Disconnect
      };

      let result = self
         .retry
         .run(async || acknowledge(&mut *link, command).await)
         .await;
      match result {
         Ok(confirmation) => Outcome::Ok(confirmation),
         Err(error) => degraded(diag, "set_pairing", Confirmation::Failed, error),
      }
   }

   /// Queries the Bluetooth link status.
   pub async fn status<T, S>(&self, link: &mut T, diag: &S) -> Outcome<LinkStatus>
   where
      T: LineTransport,
      S: DiagnosticSink + ?Sized,
   {
      let result = self
         .retry
         .run(async || query_status(&mut *link).await)
         .await;
      match result {
         Ok(status) => Outcome::Ok(status),
         Err(error) => degraded(diag, "status", LinkStatus::Unknown, error),
      }
   }

   /// Queries whether the endpoint is pairing or has a device connected.
   pub async fn pairing_state<T, S>(&self, link: &mut T, diag: &S) -> Outcome<PairingState>
   where
      T: LineTransport,
      S: DiagnosticSink + ?Sized,
   {
      let result = self
         .retry
         .run(async || query_status(&mut *link).await)
         .await;
      match result {
         Ok(status) => Outcome::Ok(status.pairing_state()),
         Err(error) => degraded(diag, "pairing_state", PairingState::Unknown, error),
      }
   }

   /// Queries the name of the connected device.
   ///
   /// Not retried: a NACK simply means no device is connected, which is
   /// an answer rather than a failure.
   pub async fn device_name<T, S>(&self, link: &mut T, diag: &S) -> Outcome<SmolStr>
   where
      T: LineTransport,
      S: DiagnosticSink + ?Sized,
   {
      match query_quoted(link, Command::QueryDeviceName).await {
         Ok(name) => Outcome::Ok(name),
         Err(error) => degraded(diag, "device_name", SmolStr::new_static(UNKNOWN), error),
      }
   }

   /// Queries now-playing metadata as `<song> - <artist>`.
   ///
   /// A two-step transaction; a failure in either sub-query surfaces
   /// immediately and the composite is never retried. Callers needing
   /// resilience wrap it themselves.
   pub async fn music_info<T, S>(&self, link: &mut T, diag: &S) -> Outcome<SmolStr>
   where
      T: LineTransport,
      S: DiagnosticSink + ?Sized,
   {
      let song = match query_quoted(&mut *link, Command::QuerySongName).await {
         Ok(song) => song,
         Err(error) => {
            return degraded(diag, "music_info", SmolStr::new_static(UNKNOWN), error);
         },
      };
      let artist = match query_quoted(&mut *link, Command::QueryArtistName).await {
         Ok(artist) => artist,
         Err(error) => {
            return degraded(diag, "music_info", SmolStr::new_static(UNKNOWN), error);
         },
      };

      let mut value = SmolStr::new_static(UNKNOWN);
      if song != UNKNOWN {
         value = song;
      }
      if artist != UNKNOWN {
         value = format_smolstr!("{value} - {artist}");
      }
      Outcome::Ok(value)
   }
}

/// Runs one command/response transaction and returns the sanitized line.
async fn transact<T: LineTransport>(link: &mut T, command: Command) -> Result<SmolStr> {
   debug!("-> {}", command.mnemonic());
   if !link.send_line(&command.encode()).await {
      return Err(DriverError::SendFailed {
         command: command.mnemonic(),
      });
   }

   let raw = link.recv_line().await;
   let response = parser::sanitize(&raw)?;
   debug!("<- {response}");
   Ok(response.into())
}

/// Transaction for set-style commands: any non-NACK reply confirms.
async fn acknowledge<T: LineTransport>(link: &mut T, command: Command) -> Result<Confirmation> {
   let response = transact(link, command).await?;
   parser::confirm(&response)?;
   Ok(Confirmation::Confirmed)
}

async fn query_status<T: LineTransport>(link: &mut T) -> Result<LinkStatus> {
   let response = transact(link, Command::QueryStatus).await?;
   parser::parse_status(&response)
}

/// Transaction for quoted-payload queries. A NACK reply means no device
/// is connected and yields the `unknown` sentinel without an error.
async fn query_quoted<T: LineTransport>(link: &mut T, command: Command) -> Result<SmolStr> {
   let response = transact(link, command).await?;
   if response.contains(NACK) {
      return Ok(SmolStr::new_static(UNKNOWN));
   }
   Ok(parser::quoted_payload(&response).unwrap_or_else(|| SmolStr::new_static(UNKNOWN)))
}

/// Reports a terminal failure once to the diagnostic sink and wraps the
/// fallback value the host should surface.
fn degraded<T, S: DiagnosticSink + ?Sized>(
   diag: &S,
   operation: &str,
   fallback: T,
   error: DriverError,
) -> Outcome<T> {
   let message = format_smolstr!("{operation}: {error}");
   warn!("{message}");
   diag.report(&message);
   Outcome::Degraded { fallback, error }
}
