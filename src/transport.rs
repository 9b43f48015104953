//! Transport seam towards the host control framework.
//!
//! Socket lifecycle, pooling and dispatch all live in the host framework;
//! the driver only ever sees a live line-oriented connection through this
//! trait. Implementations are expected to be strictly request/response —
//! the protocol has no pipelining.

/// A live line-oriented connection to one endpoint.
///
/// The driver borrows the connection for the duration of a single
/// operation and never takes ownership. Serializing concurrent operations
/// on the same connection is the caller's responsibility.
#[allow(async_fn_in_trait)]
pub trait LineTransport {
   /// Transmits one line. The `<CR>` terminator is already included by
   /// the driver. Returns `false` when the write failed.
   async fn send_line(&mut self, line: &str) -> bool;

   /// Reads the next response line, terminator stripped. Returns an
   /// empty string on failure or read timeout.
   async fn recv_line(&mut self) -> String;
}

impl<T: LineTransport> LineTransport for &mut T {
   async fn send_line(&mut self, line: &str) -> bool {
      (**self).send_line(line).await
   }

   async fn recv_line(&mut self) -> String {
      (**self).recv_line().await
   }
}
