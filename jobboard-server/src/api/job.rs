//! Job API Handlers
//!
//! HTTP endpoints for the job directory. Malformed bodies, query strings and
//! path segments are turned into 422 responses before the service is called.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use jobboard_core::domain::job::Job;
use jobboard_core::dto::job::{DeleteJobResponse, JobPayload, ListJobs};
use sqlx::SqlitePool;

use crate::api::error::ApiResult;
use crate::service::job_service;

/// POST /jobs
/// Create a job and its company
pub async fn create_job(
    State(pool): State<SqlitePool>,
    payload: Result<Json<JobPayload>, JsonRejection>,
) -> ApiResult<Json<Job>> {
    let Json(req) = payload?;
    tracing::info!("Creating job: {} at {}", req.title, req.company.name);

    let job = job_service::create_job(&pool, req).await?;

    Ok(Json(job))
}

/// GET /jobs?skip=&limit=
/// List one page of jobs
pub async fn list_jobs(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListJobs>, QueryRejection>,
) -> ApiResult<Json<Vec<Job>>> {
    let Query(params) = params?;
    tracing::debug!("Listing jobs (skip: {}, limit: {})", params.skip, params.limit);

    let jobs = job_service::list_jobs(&pool, params).await?;

    Ok(Json(jobs))
}

/// GET /jobs/{id}
/// Get job details by ID
pub async fn get_job(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Job>> {
    let Path(id) = id?;
    tracing::debug!("Getting job: {}", id);

    let job = job_service::get_job(&pool, id).await?;

    Ok(Json(job))
}

/// PUT /jobs/{id}
/// Overwrite a job and its company
pub async fn update_job(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<JobPayload>, JsonRejection>,
) -> ApiResult<Json<Job>> {
    let Path(id) = id?;
    let Json(req) = payload?;
    tracing::info!("Updating job: {}", id);

    let job = job_service::update_job(&pool, id, req).await?;

    Ok(Json(job))
}

/// DELETE /jobs/{id}
/// Delete a job, leaving its company in place
pub async fn delete_job(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteJobResponse>> {
    let Path(id) = id?;
    tracing::info!("Deleting job: {}", id);

    job_service::delete_job(&pool, id).await?;

    Ok(Json(DeleteJobResponse::deleted()))
}
