//! Job Repository
//!
//! Handles all database operations related to jobs. Reads join the owning
//! company so every returned job carries its resolved company fields.

use jobboard_core::domain::company::CompanyProfile;
use jobboard_core::domain::job::Job;
use jobboard_core::dto::job::JobPayload;
use sqlx::SqliteConnection;

/// Insert a new job referencing an existing company and return its ID
pub async fn create(
    conn: &mut SqliteConnection,
    company_id: i64,
    req: &JobPayload,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO jobs (title, type, description, location, salary, company_id)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&req.title)
    .bind(&req.job_type)
    .bind(&req.description)
    .bind(&req.location)
    .bind(&req.salary)
    .bind(company_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find a job by ID with its company resolved
pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Job>, sqlx::Error> {
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        SELECT j.id, j.title, j.type AS job_type, j.description, j.location, j.salary,
               c.name AS company_name, c.description AS company_description,
               c.contact_email AS company_contact_email, c.contact_phone AS company_contact_phone
        FROM jobs j
        JOIN companies c ON c.id = j.company_id
        WHERE j.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List jobs in ID order, one page at a time
pub async fn list(
    conn: &mut SqliteConnection,
    skip: u32,
    limit: u32,
) -> Result<Vec<Job>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>(
        r#"
        SELECT j.id, j.title, j.type AS job_type, j.description, j.location, j.salary,
               c.name AS company_name, c.description AS company_description,
               c.contact_email AS company_contact_email, c.contact_phone AS company_contact_phone
        FROM jobs j
        JOIN companies c ON c.id = j.company_id
        ORDER BY j.id ASC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(i64::from(limit))
    .bind(i64::from(skip))
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Overwrite every scalar field of a job and return the ID of its company
///
/// Returns `None` when no job has the given ID. The company reference itself
/// is never changed.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    req: &JobPayload,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE jobs
        SET title = ?, type = ?, description = ?, location = ?, salary = ?
        WHERE id = ?
        RETURNING company_id
        "#,
    )
    .bind(&req.title)
    .bind(&req.job_type)
    .bind(&req.description)
    .bind(&req.location)
    .bind(&req.salary)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

/// Delete a job by ID
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    job_type: String,
    description: String,
    location: String,
    salary: String,
    company_name: String,
    company_description: String,
    company_contact_email: String,
    company_contact_phone: String,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            title: row.title,
            job_type: row.job_type,
            description: row.description,
            location: row.location,
            salary: row.salary,
            company: CompanyProfile {
                name: row.company_name,
                description: row.company_description,
                contact_email: row.company_contact_email,
                contact_phone: row.company_contact_phone,
            },
        }
    }
}
