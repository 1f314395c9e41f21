//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod document_repo;
pub mod project_repo;
pub mod session_repo;
pub mod timeline_event_repo;
pub mod user_repo;

pub use document_repo::DocumentRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use timeline_event_repo::TimelineEventRepo;
pub use user_repo::UserRepo;
