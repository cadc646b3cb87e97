//! Job Board Server
//!
//! HTTP service storing job listings and the companies that post them.
//!
//! Layers, outermost first:
//! - `api`: axum router, handlers and error responses
//! - `service`: directory operations and transaction boundaries
//! - `repository`: SQL for each table
//! - `db`: connection pool and schema

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;
