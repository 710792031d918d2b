//! # Remote Probe
//!
//! A stand-in for a call to a remote billing service. There is no remote:
//! the probe always fails with [`ServiceError::BadStatus`] so that callers
//! exercise their handling of the closed [`ServiceError`] set.

use crate::error::ServiceError;

/// Failure kind every probe reports.
pub const PROBE_FAILURE: ServiceError = ServiceError::BadStatus;

/// Checks the (imaginary) remote billing service.
///
/// ## Example
/// ```rust
/// use invoice_core::error::ServiceError;
/// use invoice_core::probe::probe_remote;
///
/// match probe_remote() {
///     Ok(()) => unreachable!(),
///     Err(ServiceError::BadInput | ServiceError::BadResponse | ServiceError::BadStatus) => {}
/// }
/// ```
pub fn probe_remote() -> Result<(), ServiceError> {
    Err(PROBE_FAILURE)
}
