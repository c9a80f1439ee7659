//! Lookbook read API library.
//!
//! Exposes the building blocks (config, state, error handling, request
//! origin extraction, projections, routes) so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod origin;
pub mod routes;
pub mod state;
pub mod views;
