//! Native entry point of the tenkey engine.
//!
//! Decoding lives in `tenkey-core` and key handling in `tenkey-session`;
//! this crate only exports them through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;
