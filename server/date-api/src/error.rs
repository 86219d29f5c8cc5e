//! Structured error types for date resolution.

use thiserror::Error;

/// Failures surfaced to the caller inside the JSON body.
///
/// The `Display` output is the exact wire string clients match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
  #[error("Invalid Date")]
  InvalidDate,

  #[error("Invalid Timezone")]
  InvalidTimezone,
}
