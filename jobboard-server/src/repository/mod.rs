//! Repository Module
//!
//! Data access layer for the job board.
//! Each repository handles database operations for a specific domain entity.
//! Functions take a borrowed connection so callers decide whether they run
//! inside a transaction.

pub mod company;
pub mod job;

// Re-export for convenience
pub use company as company_repository;
pub use job as job_repository;
