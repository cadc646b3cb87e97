//! Company domain types

use serde::{Deserialize, Serialize};

/// Stored employer record
///
/// Only reachable through the jobs that reference it. Created as a side effect
/// of job creation and never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub profile: CompanyProfile,
}

/// Descriptive fields of a company
///
/// This is the embedded form carried inline in job requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
}
