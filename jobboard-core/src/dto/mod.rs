//! Data Transfer Objects
//!
//! Request and response bodies exchanged between the server and its callers
//! that are not themselves stored entities.

pub mod job;
