use serde::Serialize;

use crate::date::time_ago;
use crate::Job;

/// Envelope for search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<T> {
    pub total: usize,
    pub results: Vec<T>,
}

impl<T> SearchResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            total: results.len(),
            results,
        }
    }
}

/// Job record plus the relative-time label the job card renders.
#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: Job,
    pub posted_ago: String,
}

impl From<Job> for JobView {
    fn from(job: Job) -> Self {
        let posted_ago = time_ago(job.posted_at);
        Self { job, posted_ago }
    }
}
