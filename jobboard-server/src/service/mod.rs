//! Service Module
//!
//! Business logic layer for the job board.
//! Services own the transaction boundaries and call into repositories.

pub mod job;

// Re-export for convenience
pub use job as job_service;
