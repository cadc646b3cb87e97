//! Job-related API endpoints

use crate::JobBoardClient;
use crate::error::Result;
use jobboard_core::domain::job::Job;
use jobboard_core::dto::job::{DeleteJobResponse, JobPayload, ListJobs};

impl JobBoardClient {
    /// Create a job along with a new company record
    pub async fn create_job(&self, req: &JobPayload) -> Result<Job> {
        let url = format!("{}/jobs", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// List one page of jobs
    ///
    /// # Example
    /// ```no_run
    /// # use jobboard_client::JobBoardClient;
    /// # use jobboard_core::dto::job::ListJobs;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = JobBoardClient::new("http://localhost:8000");
    /// let second_page = client.list_jobs(ListJobs { skip: 20, limit: 20 }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_jobs(&self, params: ListJobs) -> Result<Vec<Job>> {
        let url = format!("{}/jobs", self.base_url);
        let response = self.client.get(&url).query(&params).send().await?;

        self.handle_response(response).await
    }

    /// Get a job by ID
    pub async fn get_job(&self, job_id: i64) -> Result<Job> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Overwrite a job and the company it belongs to
    pub async fn update_job(&self, job_id: i64, req: &JobPayload) -> Result<Job> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        let response = self.client.put(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Delete a job
    pub async fn delete_job(&self, job_id: i64) -> Result<DeleteJobResponse> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_response(response).await
    }
}
