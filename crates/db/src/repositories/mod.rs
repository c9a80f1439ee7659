//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod media_file_repo;
pub mod member_image_repo;
pub mod team_member_repo;

pub use media_file_repo::MediaFileRepo;
pub use member_image_repo::MemberImageRepo;
pub use team_member_repo::TeamMemberRepo;
