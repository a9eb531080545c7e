//! Timetable API server library.
//!
//! The binary in `main.rs` and the integration tests both assemble the
//! server from [`router::build_app_router`].

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
