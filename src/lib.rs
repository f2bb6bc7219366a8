//! secure-error-service: demonstration backend for secure error handling.
//!
//! One deliberately failing endpoint plus a global fallback boundary. Full
//! diagnostic detail (error chain + backtrace) goes to the internal log sink;
//! clients only ever see a fixed, generic JSON message.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;
