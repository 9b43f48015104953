//! Diagnostic sink for per-connection error reporting.
//!
//! The host framework keeps an error log per connection and surfaces it
//! through health endpoints. The driver reports terminal failures there
//! in addition to returning them, so callers never have to mine the log
//! to detect a failure.

use parking_lot::Mutex;
use smol_str::SmolStr;

/// Capability for recording diagnostic entries.
///
/// Passed explicitly into every operation; fire-and-forget, must never
/// fail the caller.
pub trait DiagnosticSink {
   /// Appends one entry to the per-connection error log.
   fn report(&self, message: &str);
}

/// In-memory diagnostic log, one instance per connection.
#[derive(Debug, Default)]
pub struct ErrorLog {
   entries: Mutex<Vec<SmolStr>>,
}

impl ErrorLog {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn entries(&self) -> Vec<SmolStr> {
      self.entries.lock().clone()
   }

   pub fn len(&self) -> usize {
      self.entries.lock().len()
   }

   pub fn is_empty(&self) -> bool {
      self.entries.lock().is_empty()
   }

   pub fn clear(&self) {
      self.entries.lock().clear();
   }
}

impl DiagnosticSink for ErrorLog {
   fn report(&self, message: &str) {
      self.entries.lock().push(message.into());
   }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
   fn report(&self, message: &str) {
      (**self).report(message);
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn log_accumulates_entries() {
      let log = ErrorLog::new();
      assert!(log.is_empty());

      log.report("status: empty response from device");
      log.report("set_pairing: device rejected command: NACK BTB");

      assert_eq!(log.len(), 2);
      assert_eq!(log.entries()[0], "status: empty response from device");

      log.clear();
      assert!(log.is_empty());
   }
}
