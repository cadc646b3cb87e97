//! Company Repository
//!
//! Handles all database operations related to companies.

use jobboard_core::domain::company::{Company, CompanyProfile};
use sqlx::SqliteConnection;

/// Insert a new company and return it with its assigned ID
pub async fn create(
    conn: &mut SqliteConnection,
    profile: &CompanyProfile,
) -> Result<Company, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO companies (name, description, contact_email, contact_phone)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&profile.name)
    .bind(&profile.description)
    .bind(&profile.contact_email)
    .bind(&profile.contact_phone)
    .execute(&mut *conn)
    .await?;

    Ok(Company {
        id: result.last_insert_rowid(),
        profile: profile.clone(),
    })
}

/// Find a company by ID
pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Company>, sqlx::Error> {
    let row = sqlx::query_as::<_, CompanyRow>(
        r#"
        SELECT id, name, description, contact_email, contact_phone
        FROM companies
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Overwrite every descriptive field of an existing company
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    profile: &CompanyProfile,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE companies
        SET name = ?, description = ?, contact_email = ?, contact_phone = ?
        WHERE id = ?
        "#,
    )
    .bind(&profile.name)
    .bind(&profile.description)
    .bind(&profile.contact_email)
    .bind(&profile.contact_phone)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    description: String,
    contact_email: String,
    contact_phone: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            profile: CompanyProfile {
                name: row.name,
                description: row.description,
                contact_email: row.contact_email,
                contact_phone: row.contact_phone,
            },
        }
    }
}
