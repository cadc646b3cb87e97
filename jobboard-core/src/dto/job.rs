//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::company::CompanyProfile;

/// Default page size for job listings
pub const DEFAULT_LIST_LIMIT: u32 = 999;

/// Acknowledgement returned after a job is deleted
pub const JOB_DELETED_DETAIL: &str = "Job deleted successfully";

/// Body of a create or update request
///
/// The company is always sent in full. On create it becomes a new company
/// record; on update it overwrites the job's existing company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub company: CompanyProfile,
}

/// Pagination parameters for listing jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJobs {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ListJobs {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

/// Response body of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub detail: String,
}

impl DeleteJobResponse {
    pub fn deleted() -> Self {
        Self {
            detail: JOB_DELETED_DETAIL.to_string(),
        }
    }
}
