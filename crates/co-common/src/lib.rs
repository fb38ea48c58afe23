pub mod api;
pub mod catalog;
pub mod date;
pub mod logging;
pub mod search;
pub mod session;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a posted job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    New,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

// Commonly used record models for the search engine.
//
// Records are produced once by the store generator and never mutated
// afterwards; `daily_wage_min <= daily_wage_max` and
// `budget_min <= budget_max` hold by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub category: String,
    pub city: String,
    pub years_of_experience: u32,
    pub daily_wage_min: u32,
    pub daily_wage_max: u32,
    /// Average rating in [0.0, 5.0].
    pub rating_average: f32,
    pub rating_count: u32,
    pub kyc_verified: bool,
    pub sub_skills: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub customer_name: String,
    pub customer_id: String,
    pub budget_min: u32,
    pub budget_max: u32,
    pub city: String,
    pub locality: String,
    /// Distance from the browsing worker, in whole kilometres.
    pub distance_km: u32,
    pub status: JobStatus,
    pub posted_at: DateTime<Utc>,
    pub urgency: Urgency,
    pub verified_customer: bool,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            category: String::new(),
            customer_name: String::new(),
            customer_id: String::new(),
            budget_min: 0,
            budget_max: 0,
            city: String::new(),
            locality: String::new(),
            distance_km: 0,
            status: JobStatus::default(),
            posted_at: Utc::now(),
            urgency: Urgency::default(),
            verified_customer: false,
        }
    }
}
