//! Request handlers for the catalog read API.
//!
//! Handlers delegate to the repositories in `lookbook_db`, project rows
//! through [`crate::views`] and map errors via [`crate::error::AppError`].

pub mod legacy_media;
pub mod media_file;
pub mod team_member;
