//! Job Service
//!
//! The job directory operations. Each call acquires its own connection or
//! transaction from the pool and releases it on every exit path. Writes that
//! touch both tables run in a single transaction, so a job never references a
//! missing or half-written company.

use jobboard_core::domain::job::Job;
use jobboard_core::dto::job::{JobPayload, ListJobs};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::repository::{company_repository, job_repository};

/// Service error type
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Job {0} not found")]
    NotFound(i64),

    #[error("Company {0} not found")]
    CompanyNotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, JobError>;

/// Create a job together with a brand-new company record
///
/// No lookup of existing companies happens: identical payloads produce
/// distinct companies.
pub async fn create_job(pool: &SqlitePool, req: JobPayload) -> Result<Job> {
    validate_job_payload(&req)?;

    let mut tx = pool.begin().await?;

    let company = company_repository::create(&mut tx, &req.company).await?;
    let job_id = job_repository::create(&mut tx, company.id, &req).await?;
    let job = job_repository::find_by_id(&mut tx, job_id)
        .await?
        .ok_or(JobError::NotFound(job_id))?;

    tx.commit().await?;

    tracing::info!("Job created: {} for company: {}", job.id, company.id);

    Ok(job)
}

/// List one page of jobs
pub async fn list_jobs(pool: &SqlitePool, params: ListJobs) -> Result<Vec<Job>> {
    if params.limit == 0 {
        return Err(JobError::Validation(
            "limit must be a positive integer".to_string(),
        ));
    }

    let mut conn = pool.acquire().await?;
    let jobs = job_repository::list(&mut conn, params.skip, params.limit).await?;
    Ok(jobs)
}

/// Get a job by ID
pub async fn get_job(pool: &SqlitePool, id: i64) -> Result<Job> {
    let mut conn = pool.acquire().await?;
    let job = job_repository::find_by_id(&mut conn, id)
        .await?
        .ok_or(JobError::NotFound(id))?;

    Ok(job)
}

/// Overwrite a job and its existing company in one transaction
///
/// Unlike create, no new company is minted: the company already linked to the
/// job receives the payload's company fields.
pub async fn update_job(pool: &SqlitePool, id: i64, req: JobPayload) -> Result<Job> {
    validate_job_payload(&req)?;

    let mut tx = pool.begin().await?;

    // Must write before any read: a WAL reader cannot upgrade to a writer
    // once another connection has committed.
    let company_id = job_repository::update(&mut tx, id, &req)
        .await?
        .ok_or(JobError::NotFound(id))?;

    let company = company_repository::find_by_id(&mut tx, company_id)
        .await?
        .ok_or(JobError::CompanyNotFound(company_id))?;

    if !company_repository::update(&mut tx, company.id, &req.company).await? {
        return Err(JobError::CompanyNotFound(company.id));
    }

    let job = job_repository::find_by_id(&mut tx, id)
        .await?
        .ok_or(JobError::NotFound(id))?;

    tx.commit().await?;

    tracing::info!("Job updated: {} (company: {})", id, company.id);

    Ok(job)
}

/// Delete a job. Its company stays in storage.
pub async fn delete_job(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut conn = pool.acquire().await?;
    let deleted = job_repository::delete(&mut conn, id).await?;

    if !deleted {
        return Err(JobError::NotFound(id));
    }

    tracing::info!("Job deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_job_payload(req: &JobPayload) -> Result<()> {
    let fields = [
        ("title", &req.title),
        ("type", &req.job_type),
        ("description", &req.description),
        ("location", &req.location),
        ("salary", &req.salary),
        ("company.name", &req.company.name),
        ("company.description", &req.company.description),
        ("company.contactEmail", &req.company.contact_email),
        ("company.contactPhone", &req.company.contact_phone),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(JobError::Validation(format!(
                "Job {} cannot be empty",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::domain::company::CompanyProfile;

    fn payload() -> JobPayload {
        JobPayload {
            title: "Engineer".to_string(),
            job_type: "Full-time".to_string(),
            description: "Build systems".to_string(),
            location: "Remote".to_string(),
            salary: "100000".to_string(),
            company: CompanyProfile {
                name: "Acme".to_string(),
                description: "Tech co".to_string(),
                contact_email: "hr@acme.com".to_string(),
                contact_phone: "555-0100".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(validate_job_payload(&payload()).is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut req = payload();
        req.title = "".to_string();

        let result = validate_job_payload(&req);
        assert!(matches!(result, Err(JobError::Validation(msg)) if msg.contains("title")));
    }

    #[test]
    fn test_validate_blank_company_field() {
        let mut req = payload();
        req.company.contact_phone = "   ".to_string();

        let result = validate_job_payload(&req);
        assert!(
            matches!(result, Err(JobError::Validation(msg)) if msg.contains("company.contactPhone"))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(JobError::NotFound(3).to_string(), "Job 3 not found");
        assert_eq!(JobError::CompanyNotFound(9).to_string(), "Company 9 not found");
    }
}
