//! Response line parsing for the endpoint's acknowledgement protocol.
//!
//! Replies arrive as single ASCII lines framed by `\r`, `\n` and stray
//! null bytes. This module strips the framing, detects negative
//! acknowledgements and extracts the typed fields.

use smol_str::SmolStr;

use crate::{
   error::{DriverError, Result},
   protocol::{LinkStatus, NACK},
};

/// Strips framing characters from a raw reply line.
///
/// A line that is empty after trimming means the transport read failed or
/// timed out.
pub fn sanitize(raw: &str) -> Result<&str> {
   let line = raw.trim_matches(['\r', '\n', '\0']);
   if line.is_empty() {
      return Err(DriverError::EmptyResponse);
   }
   Ok(line)
}

/// Checks a sanitized line for a negative acknowledgement.
pub fn confirm(line: &str) -> Result<()> {
   if line.contains(NACK) {
      return Err(DriverError::CommandRejected {
         response: line.into(),
      });
   }
   Ok(())
}

/// Extracts the link status from an `ACK BTS n` reply.
///
/// The status code is the third whitespace-delimited token. A missing,
/// non-numeric or out-of-range code is an invalid response.
pub fn parse_status(line: &str) -> Result<LinkStatus> {
   confirm(line)?;

   let invalid = || DriverError::InvalidStatusCode {
      response: line.into(),
   };

   let token = line.split(' ').nth(2).ok_or_else(invalid)?;
   let code: u8 = token.parse().map_err(|_| invalid())?;
   LinkStatus::from_code(code).ok_or_else(invalid)
}

/// Extracts the quoted payload from an `ACK <CMD> "payload"` reply.
///
/// Returns `None` when no quoted segment is present or the segment is
/// empty. The device substitutes `?` for characters it cannot encode in
/// its reply charset; those come back as `'`, the most common original.
pub fn quoted_payload(line: &str) -> Option<SmolStr> {
   let (_, rest) = line.split_once('"')?;
   let payload = rest.trim_matches(['"', '\r', '\n']);
   if payload.is_empty() {
      return None;
   }
   Some(payload.replace('?', "'").into())
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::protocol::Command;

   #[test]
   fn sanitize_strips_framing() {
      assert_eq!(sanitize("ACK BTS 1\r\n").unwrap(), "ACK BTS 1");
      assert_eq!(sanitize("\0\rACK CBC\r\0").unwrap(), "ACK CBC");
   }

   #[test]
   fn sanitize_rejects_blank_lines() {
      assert!(matches!(sanitize(""), Err(DriverError::EmptyResponse)));
      assert!(matches!(
         sanitize("\r\n\0"),
         Err(DriverError::EmptyResponse)
      ));
   }

   #[test]
   fn confirm_detects_nack() {
      assert!(confirm("ACK BTB").is_ok());
      assert!(matches!(
         confirm("NACK BTB"),
         Err(DriverError::CommandRejected { .. })
      ));
   }

   #[test]
   fn status_codes_map_to_link_states() {
      assert_eq!(parse_status("ACK BTS 0").unwrap(), LinkStatus::Idle);
      assert_eq!(parse_status("ACK BTS 1").unwrap(), LinkStatus::Discoverable);
      for code in 2..=5 {
         let line = format!("ACK BTS {code}");
         assert_eq!(parse_status(&line).unwrap(), LinkStatus::Connected);
      }
   }

   #[test]
   fn status_round_trip() {
      // A synthetic full cycle: encode the query, parse its acknowledgement.
      assert_eq!(Command::QueryStatus.encode(), "BTS\r");
      let line = sanitize("ACK BTS 2\r").unwrap();
      assert_eq!(parse_status(line).unwrap(), LinkStatus::Connected);
   }

   #[test]
   fn status_rejects_out_of_range_codes() {
      assert!(matches!(
         parse_status("ACK BTS 6"),
         Err(DriverError::InvalidStatusCode { .. })
      ));
      assert!(matches!(
         parse_status("ACK BTS seven"),
         Err(DriverError::InvalidStatusCode { .. })
      ));
      assert!(matches!(
         parse_status("ACK BTS"),
         Err(DriverError::InvalidStatusCode { .. })
      ));
   }

   #[test]
   fn status_rejects_nack_before_parsing() {
      assert!(matches!(
         parse_status("NACK BTS 1"),
         Err(DriverError::CommandRejected { .. })
      ));
   }

   #[test]
   fn quoted_payload_extraction() {
      assert_eq!(
         quoted_payload(r#"ACK BTCDN "Kitchen Speaker""#).unwrap(),
         "Kitchen Speaker"
      );
      assert_eq!(quoted_payload("ACK BTCDN"), None);
      assert_eq!(quoted_payload(r#"ACK BTCDN """#), None);
   }

   #[test]
   fn question_marks_become_apostrophes() {
      assert_eq!(
         quoted_payload(r#"ACK BTCDN "My?Speaker""#).unwrap(),
         "My'Speaker"
      );
   }
}
