//! Domain rules shared by the lookbook API server and batch jobs.
//!
//! Nothing in this crate touches the database or the network: it holds the
//! media category table, URL resolution, legacy path clean-up, the image
//! compression search and the per-record migration outcome types.

pub mod compression;
pub mod error;
pub mod media;
pub mod migration;
pub mod paths;
pub mod types;
pub mod urls;
