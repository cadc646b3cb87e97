//! Core domain types
//!
//! This module contains the entities stored by the directory service.
//! They are shared between the server (which persists them) and the client
//! (which receives them over the wire).

pub mod company;
pub mod job;
