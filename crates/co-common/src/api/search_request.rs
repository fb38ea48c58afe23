use serde::Deserialize;

use crate::search::{SearchFilters, SortKey, ANY, ANY_RATING};
use crate::JobStatus;

/// Query parameters for `GET /api/workers/search`.
///
/// Everything defaults to "no constraint"; numeric bounds use the `ANY`
/// sentinel, so `min_experience=0` is the same as omitting it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkerSearchParams {
    pub q: String,
    pub category: Option<String>,
    pub city: Option<String>,
    pub min_experience: u32,
    pub max_wage: u32,
    pub min_rating: f32,
    pub verified_only: bool,
    pub sort_by: Option<SortKey>,
}

impl WorkerSearchParams {
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            category: self.category.clone(),
            city: self.city.clone(),
            min_experience: self.min_experience,
            max_wage: self.max_wage,
            min_rating: self.min_rating,
            verified_only: self.verified_only,
            sort_by: self.sort_by.unwrap_or_default(),
            ..SearchFilters::default()
        }
    }
}

/// Query parameters for `GET /api/jobs/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobSearchParams {
    pub q: String,
    pub category: Option<String>,
    pub city: Option<String>,
    /// Budget floor: jobs whose maximum budget reaches it pass.
    pub min_budget: u32,
    /// Budget ceiling: jobs whose minimum budget fits pass.
    pub max_budget: u32,
    pub status: Option<JobStatus>,
    pub max_distance_km: u32,
    pub posted_within_days: u32,
    pub urgent_only: bool,
    pub verified_only: bool,
    pub sort_by: Option<SortKey>,
}

impl JobSearchParams {
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            category: self.category.clone(),
            city: self.city.clone(),
            min_experience: ANY,
            max_wage: self.max_budget,
            min_rating: ANY_RATING,
            verified_only: self.verified_only,
            sort_by: self.sort_by.unwrap_or_default(),
            min_budget: self.min_budget,
            status: self.status,
            max_distance_km: self.max_distance_km,
            posted_within_days: self.posted_within_days,
            urgent_only: self.urgent_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_params_deserialize_from_query_string() {
        let params: WorkerSearchParams =
            serde_urlencoded_from_str("q=plumb&category=Plumber&min_rating=4.0&sort_by=wage_low");
        assert_eq!(params.q, "plumb");
        assert_eq!(params.category.as_deref(), Some("Plumber"));
        assert_eq!(params.min_rating, 4.0);
        assert_eq!(params.sort_by, Some(SortKey::WageLow));
        assert_eq!(params.min_experience, ANY);
    }

    #[test]
    fn job_params_map_onto_the_shared_filter_set() {
        let params: JobSearchParams =
            serde_urlencoded_from_str("status=NEW&urgent_only=true&min_budget=800&max_budget=1500");
        let filters = params.to_filters();
        assert_eq!(filters.status, Some(JobStatus::New));
        assert!(filters.urgent_only);
        assert_eq!(filters.min_budget, 800);
        assert_eq!(filters.max_wage, 1500);
        assert_eq!(filters.sort_by, SortKey::Rating);
    }

    fn serde_urlencoded_from_str<T: serde::de::DeserializeOwned>(query: &str) -> T {
        serde_urlencoded::from_str(query).expect("query string should deserialize")
    }
}
