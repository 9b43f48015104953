//! Bounded retry policy for device transactions.
//!
//! The endpoint occasionally drops a command or answers late, so every
//! set operation and status query runs under a fixed retry budget with a
//! fixed inter-attempt delay. The policy is a plain value driving the
//! loop, which keeps it configurable and testable under tokio's paused
//! clock.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::time;

use crate::error::{DriverError, Result};

/// Retry budget for one logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
   /// Total attempts, the first one included.
   #[serde(default = "default_attempts")]
   pub attempts: u32,

   /// Fixed pause between attempts, in milliseconds.
   #[serde(default = "default_delay_ms")]
   pub delay_ms: u64,
}

const fn default_attempts() -> u32 {
   3
}

const fn default_delay_ms() -> u64 {
   1000
}

impl Default for RetryPolicy {
   fn default() -> Self {
      Self {
         attempts: default_attempts(),
         delay_ms: default_delay_ms(),
      }
   }
}

impl RetryPolicy {
   pub fn delay(&self) -> Duration {
      Duration::from_millis(self.delay_ms)
   }

   /// Runs `op` until it succeeds, fails definitively, or the budget is
   /// exhausted.
   ///
   /// Only transient errors re-enter the loop (see
   /// [`DriverError::is_transient`]); everything else returns
   /// immediately. Exhaustion wraps the last transient error in
   /// [`DriverError::RetryExhausted`]. Transient attempts are traced but
   /// not reported to the diagnostic sink; that is the caller's job once
   /// the failure is terminal.
   pub async fn run<T, F>(&self, mut op: F) -> Result<T>
   where
      F: AsyncFnMut() -> Result<T>,
   {
      let attempts = self.attempts.max(1);
      let mut attempt = 0;
      loop {
         attempt += 1;
         let err = match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() => err,
            Err(err) => return Err(err),
         };
         if attempt >= attempts {
            return Err(DriverError::RetryExhausted {
               attempts: attempt,
               last: Box::new(err),
            });
         }
         debug!(
            "attempt {attempt}/{attempts} failed ({err}), retrying in {:?}",
            self.delay()
         );
         time::sleep(self.delay()).await;
      }
   }
}
