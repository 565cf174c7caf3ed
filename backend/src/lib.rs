//! # Outage Schedule
//!
//! Client and server plumbing for half-hourly electricity outage schedules.
//!
//! A queue's schedule travels as a gRPC-Web frame holding a packed list of
//! per-slot flags. This crate encodes the request, decodes the response,
//! reconciles samples of any length into a canonical 48-slot day, and
//! collapses that day into outage intervals such as `10:00–12:00`.
//!
//! ## Architecture
//!
//! - [`codec`]: hand-written varint, message, and frame codec
//! - [`models`]: queue ids, the canonical schedule, outage intervals
//! - [`services`]: normalization and interval extraction
//! - [`client`]: status client, transports, and periodic refresh
//! - [`provider`]: status sources for the server
//! - [`http`]: axum-based status server
//! - [`config`]: client and server settings
//!
//! ## Example
//!
//! ```
//! use outage_schedule::{codec, models::QueueId, services::ScheduleView};
//!
//! let mut slots = vec![false; 48];
//! slots[20..24].fill(true);
//! let body = codec::encode_response_body(&slots);
//!
//! let statuses = codec::decode_response_frame(&body).unwrap();
//! let view = ScheduleView::from_raw(QueueId::new("31"), &statuses);
//! assert_eq!(view.intervals[0].to_string(), "10:00–12:00");
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ScheduleError, ScheduleResult};
