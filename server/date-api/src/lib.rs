//! Date API Service
//!
//! HTTP service that resolves timestamps and free-form date strings into
//! Unix/UTC form (optionally re-rendered in an IANA timezone) and computes
//! the absolute difference between two dates.
//!
//! Invalid input is reported in the response body as `{"error": ...}` with a
//! success status; no client input can fail the transport.

pub mod config;
pub mod date;
pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use config::Config;
pub use error::DateError;
pub use server::{router, serve};
