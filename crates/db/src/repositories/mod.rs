//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod task_repo;
pub mod team_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use team_repo::TeamRepo;
