//! HTTP server wiring.

pub mod app;
pub mod routes;
