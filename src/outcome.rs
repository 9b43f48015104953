//! Tagged operation result carrying a usable value in every case.
//!
//! The host framework expects every get/set call to produce something it
//! can surface, even when the device could not be reached. `Outcome`
//! keeps that contract while still exposing a typed error: a degraded
//! result pairs the fallback value with the failure that caused it.

use crate::error::DriverError;

/// Result of a driver operation.
#[derive(Debug)]
pub enum Outcome<T> {
   /// The operation completed and produced a real value.
   Ok(T),
   /// The operation failed; `fallback` is the value the host should
   /// surface in place of a real one.
   Degraded { fallback: T, error: DriverError },
}

impl<T> Outcome<T> {
   pub fn is_ok(&self) -> bool {
      matches!(self, Self::Ok(_))
   }

   pub fn is_degraded(&self) -> bool {
      !self.is_ok()
   }

   /// The value to surface, real or fallback.
   pub fn value(&self) -> &T {
      match self {
         Self::Ok(value) | Self::Degraded { fallback: value, .. } => value,
      }
   }

   pub fn into_value(self) -> T {
      match self {
         Self::Ok(value) | Self::Degraded { fallback: value, .. } => value,
      }
   }

   pub fn error(&self) -> Option<&DriverError> {
      match self {
         Self::Ok(_) => None,
         Self::Degraded { error, .. } => Some(error),
      }
   }

   /// Splits into the surfaced value and the optional error, mirroring
   /// the host framework's `(value, error)` return convention.
   pub fn into_parts(self) -> (T, Option<DriverError>) {
      match self {
         Self::Ok(value) => (value, None),
         Self::Degraded { fallback, error } => (fallback, Some(error)),
      }
   }

   pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
      match self {
         Self::Ok(value) => Outcome::Ok(f(value)),
         Self::Degraded { fallback, error } => Outcome::Degraded {
            fallback: f(fallback),
            error,
         },
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn ok_has_no_error() {
      let outcome = Outcome::Ok("CONNECTED");
      assert!(outcome.is_ok());
      assert!(outcome.error().is_none());
      assert_eq!(*outcome.value(), "CONNECTED");
   }

   #[test]
   fn degraded_surfaces_fallback_and_error() {
      let outcome = Outcome::Degraded {
         fallback: "unknown",
         error: DriverError::EmptyResponse,
      };
      assert!(outcome.is_degraded());
      assert_eq!(*outcome.value(), "unknown");
      let (value, error) = outcome.into_parts();
      assert_eq!(value, "unknown");
      assert!(matches!(error, Some(DriverError::EmptyResponse)));
   }

   #[test]
   fn map_preserves_shape() {
      let outcome = Outcome::Ok(2u8).map(|n| n * 2);
      assert!(matches!(outcome, Outcome::Ok(4)));

      let outcome = Outcome::Degraded {
         fallback: 0u8,
         error: DriverError::EmptyResponse,
      }
      .map(|n| n + 1);
      assert!(matches!(outcome, Outcome::Degraded { fallback: 1, .. }));
   }
}
