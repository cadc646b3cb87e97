//! Shared helpers for integration tests

#![allow(dead_code)]

use jobboard_client::JobBoardClient;
use jobboard_core::domain::company::CompanyProfile;
use jobboard_core::dto::job::JobPayload;
use jobboard_server::{api, config::ServerConfig, db};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A migrated database living in a temporary directory
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("jobs.db").display());

    let pool = db::create_pool(&ServerConfig::for_database(url))
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();

    TestDb { pool, _dir: dir }
}

/// A server bound to an ephemeral port with a client pointing at it
pub struct TestServer {
    pub client: JobBoardClient,
    pub base_url: String,
    pub db: TestDb,
}

pub async fn spawn_server() -> TestServer {
    let db = setup_db().await;
    let app = api::create_router(db.pool.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        client: JobBoardClient::new(base_url.clone()),
        base_url,
        db,
    }
}

pub fn payload(title: &str, company_name: &str) -> JobPayload {
    JobPayload {
        title: title.to_string(),
        job_type: "Full-time".to_string(),
        description: "Build systems".to_string(),
        location: "Remote".to_string(),
        salary: "100000".to_string(),
        company: CompanyProfile {
            name: company_name.to_string(),
            description: "Tech co".to_string(),
            contact_email: "hr@acme.com".to_string(),
            contact_phone: "555-0100".to_string(),
        },
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn company_id_of(pool: &SqlitePool, job_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT company_id FROM jobs WHERE id = ?")
        .bind(job_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
