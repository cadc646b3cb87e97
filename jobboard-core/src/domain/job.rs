//! Job domain types

use serde::{Deserialize, Serialize};

use crate::domain::company::CompanyProfile;

/// Job listing
///
/// The owning company is stored by reference but always travels embedded, so
/// every representation a caller sees carries the resolved company fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    /// Employment type such as "Full-time" or "Contract". Free text.
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub location: String,
    /// Free text, no currency or range semantics.
    pub salary: String,
    pub company: CompanyProfile,
}
