//! Request/response types for the date API.

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Query parameters accepted by the resolve endpoint.
#[derive(Debug, Deserialize)]
pub struct TimezoneQuery {
  /// IANA timezone identifier, e.g. "America/New_York".
  pub timezone: Option<String>,
}

/// Successful resolution: the instant as epoch milliseconds and UTC text.
#[derive(Debug, Clone, Serialize)]
pub struct DateReply {
  pub unix: i64,
  pub utc: String,
}

/// Absolute difference between two instants, decomposed into whole days and
/// within-unit remainders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReply {
  pub days: i64,
  pub hours: i64,
  pub minutes: i64,
  pub seconds: i64,
}

/// Failure payload; rides in a success-status response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReply {
  pub error: String,
}

impl From<DateError> for ErrorReply {
  fn from(err: DateError) -> Self {
    Self {
      error: err.to_string(),
    }
  }
}

/// Body of the resolve endpoint: either payload shape, same status code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DateResponse {
  Resolved(DateReply),
  Failed(ErrorReply),
}

/// Body of the diff endpoint: either payload shape, same status code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DiffResponse {
  Computed(DiffReply),
  Failed(ErrorReply),
}
