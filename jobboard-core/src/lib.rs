//! Job Board Core
//!
//! Core types for the job board directory service.
//!
//! This crate contains:
//! - Domain types: the Job and Company records as callers see them
//! - DTOs: request payloads and acknowledgements exchanged over the API

pub mod domain;
pub mod dto;
