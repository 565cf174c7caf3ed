//! HTTP server module for the status service.
//!
//! Serves the same status data three ways: the gRPC-Web method the viewer
//! calls, a plain JSON status array, and a fully normalized schedule view.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - gRPC-Web framing via crate::codec                      │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, tracing                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Services (normalizer, outage ranges, view)               │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  StatusProvider (provider/)                               │
//! │  - InMemoryStatusProvider                                 │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
