//! HTTP handlers for the date API.
//!
//! Every handler answers with a success status; failed input is reported in
//! the body as `{"error": ...}` and callers distinguish outcomes by the
//! presence of that field.

use axum::extract::{Path, Query};
use axum::Json;
use chrono::Utc;

use crate::date;
use crate::error::DateError;
use crate::types::{DateReply, DateResponse, DiffResponse, TimezoneQuery};

/// `GET /api` — the current instant.
pub async fn current_date() -> Json<DateReply> {
  let now = Utc::now();
  Json(DateReply {
    unix: now.timestamp_millis(),
    utc: date::format_utc(&now),
  })
}

/// `GET /api/:date` — resolve a timestamp or date string, optionally
/// re-rendered in the `timezone` query value.
pub async fn resolve_date(
  Path(raw): Path<String>,
  Query(query): Query<TimezoneQuery>,
) -> Json<DateResponse> {
  let body = match date::resolve(&raw, query.timezone.as_deref()) {
    Ok(instant) => DateResponse::Resolved(DateReply {
      unix: instant.timestamp_millis(),
      utc: date::format_utc(&instant),
    }),
    Err(e) => {
      eprintln!("resolve: rejected input {:?}: {}", raw, e);
      DateResponse::Failed(e.into())
    }
  };
  Json(body)
}

/// `GET /api/diff/:date1/:date2` — absolute difference between two dates.
/// Calendar parsing only; a bare timestamp is not accepted here.
pub async fn diff_dates(Path((date1, date2)): Path<(String, String)>) -> Json<DiffResponse> {
  let body = match (date::parse_calendar(&date1), date::parse_calendar(&date2)) {
    (Ok(a), Ok(b)) => DiffResponse::Computed(date::diff_breakdown(a, b)),
    _ => {
      eprintln!("diff: unparseable input {:?}/{:?}", date1, date2);
      DiffResponse::Failed(DateError::InvalidDate.into())
    }
  };
  Json(body)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn no_timezone() -> Query<TimezoneQuery> {
    Query(TimezoneQuery { timezone: None })
  }

  #[tokio::test]
  async fn current_date_tracks_now() {
    let Json(reply) = current_date().await;
    let now = Utc::now().timestamp_millis();
    assert!((now - reply.unix).abs() < 5_000);
    assert!(reply.utc.ends_with("GMT"));
  }

  #[tokio::test]
  async fn resolve_timestamp_round_trips() {
    let Json(body) = resolve_date(Path("1451001600000".into()), no_timezone()).await;
    match body {
      DateResponse::Resolved(reply) => {
        assert_eq!(reply.unix, 1451001600000);
        assert_eq!(reply.utc, "Fri, 25 Dec 2015 00:00:00 GMT");
      }
      DateResponse::Failed(reply) => panic!("unexpected error: {}", reply.error),
    }
  }

  #[tokio::test]
  async fn resolve_garbage_reports_invalid_date() {
    let Json(body) = resolve_date(Path("not-a-date".into()), no_timezone()).await;
    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(json, r#"{"error":"Invalid Date"}"#);
  }

  #[tokio::test]
  async fn resolve_unknown_timezone_reports_invalid_timezone() {
    let query = Query(TimezoneQuery {
      timezone: Some("Mars/Phobos".into()),
    });
    let Json(body) = resolve_date(Path("2015-12-25".into()), query).await;
    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(json, r#"{"error":"Invalid Timezone"}"#);
  }

  #[tokio::test]
  async fn diff_counts_whole_days() {
    let Json(body) = diff_dates(Path(("2020-01-01".into(), "2020-01-03".into()))).await;
    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(json, r#"{"days":2,"hours":0,"minutes":0,"seconds":0}"#);
  }

  #[tokio::test]
  async fn diff_rejects_bare_timestamps() {
    let Json(body) = diff_dates(Path(("1451001600000".into(), "2020-01-03".into()))).await;
    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(json, r#"{"error":"Invalid Date"}"#);
  }
}
