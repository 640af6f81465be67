//! Error taxonomy surfaced by the driver.

/// Failure modes of the public driver operations.
///
/// The driver never retries and never swallows a bus failure; every error
/// is surfaced to the caller on the operation that hit it. Retry policy
/// belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The caller's input was rejected before any bus traffic: an
    /// out-of-range cursor position, or a malformed chip address.
    InvalidArgument,
    /// A bus transaction failed. The wrapped value is the transport's own
    /// error. Shadowed register state is only committed after a confirmed
    /// write, so the driver remains consistent with the last known-good
    /// device state and the same logical operation can be retried.
    Device(E),
}
