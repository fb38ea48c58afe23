//! In-memory record query engine: text match, attribute predicates and
//! a keyed stable sort, composed into one pure `search` operation.

pub mod assist;
pub mod engine;
pub mod filters;
pub mod sort;
pub mod text;

pub use assist::{search_assisted, HintError, QueryHintParser, QueryHints};
pub use engine::search;
pub use filters::{SearchFilters, ANY, ANY_RATING};
pub use sort::SortKey;

use chrono::{DateTime, Utc};

use crate::{Job, JobStatus, Urgency, Worker};

/// Attribute access the engine needs from a searchable record kind.
///
/// Attributes a kind does not carry (job status on a worker, rating on a
/// job) default to `None`; constraints on those attributes are no-ops for
/// that kind rather than excluding it.
pub trait Record {
    /// Fields scanned by the text matcher, in UX order.
    fn text_fields(&self) -> Vec<&str>;
    fn category(&self) -> &str;
    fn city(&self) -> &str;
    /// Lower end of the asking price (daily wage or job budget).
    fn wage_floor(&self) -> u32;
    fn wage_ceiling(&self) -> u32;
    fn is_verified(&self) -> bool;
    fn experience_years(&self) -> Option<u32> {
        None
    }
    fn rating(&self) -> Option<f32> {
        None
    }
    fn status(&self) -> Option<JobStatus> {
        None
    }
    fn distance_km(&self) -> Option<u32> {
        None
    }
    fn posted_at(&self) -> Option<DateTime<Utc>> {
        None
    }
    fn urgency(&self) -> Option<Urgency> {
        None
    }
}

impl Record for Worker {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.category, &self.city]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn wage_floor(&self) -> u32 {
        self.daily_wage_min
    }

    fn wage_ceiling(&self) -> u32 {
        self.daily_wage_max
    }

    fn is_verified(&self) -> bool {
        self.kyc_verified
    }

    fn experience_years(&self) -> Option<u32> {
        Some(self.years_of_experience)
    }

    fn rating(&self) -> Option<f32> {
        Some(self.rating_average)
    }
}

impl Record for Job {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.category,
            &self.description,
            &self.city,
            &self.customer_name,
        ]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn wage_floor(&self) -> u32 {
        self.budget_min
    }

    fn wage_ceiling(&self) -> u32 {
        self.budget_max
    }

    fn is_verified(&self) -> bool {
        self.verified_customer
    }

    fn status(&self) -> Option<JobStatus> {
        Some(self.status)
    }

    fn distance_km(&self) -> Option<u32> {
        Some(self.distance_km)
    }

    fn posted_at(&self) -> Option<DateTime<Utc>> {
        Some(self.posted_at)
    }

    fn urgency(&self) -> Option<Urgency> {
        Some(self.urgency)
    }
}
