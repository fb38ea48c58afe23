use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, SortKey};
use crate::JobStatus;

/// Sentinel meaning "no constraint" for numeric filter bounds.
///
/// Inherited UX contract: the "Any" option maps to the same value as an
/// unset slider, so zero is overloaded as both "unset" and "literal zero"
/// and a user cannot filter for exactly 0 years of experience. Every
/// numeric predicate goes through this constant rather than special-casing
/// zero inline.
pub const ANY: u32 = 0;

/// `ANY` for the rating bound.
pub const ANY_RATING: f32 = 0.0;

/// Per-query filter set. Constructed per search, carries no identity.
///
/// Every field is optional: `None`, the empty string, `false` and the
/// `ANY` sentinels all mean "no constraint". Present constraints compose
/// with logical AND. Constraints on attributes a record kind does not
/// carry (e.g. `status` while searching workers) are no-ops for that kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Exact category match, case-sensitive as stored.
    pub category: Option<String>,
    pub city: Option<String>,
    pub min_experience: u32,
    /// Wage ceiling: a record passes if its asking-price floor fits the budget.
    pub max_wage: u32,
    pub min_rating: f32,
    pub verified_only: bool,
    pub sort_by: SortKey,
    // Job-side constraints.
    /// Budget floor: a record passes when its price ceiling reaches it.
    pub min_budget: u32,
    pub status: Option<JobStatus>,
    pub max_distance_km: u32,
    pub posted_within_days: u32,
    pub urgent_only: bool,
}

impl SearchFilters {
    /// True when `record` passes every present constraint.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if let Some(category) = self.category.as_deref() {
            if !category.is_empty() && record.category() != category {
                return false;
            }
        }

        if let Some(city) = self.city.as_deref() {
            if !city.is_empty() && record.city() != city {
                return false;
            }
        }

        if self.min_experience != ANY {
            if let Some(years) = record.experience_years() {
                if years < self.min_experience {
                    return false;
                }
            }
        }

        if self.max_wage != ANY && record.wage_floor() > self.max_wage {
            return false;
        }

        if self.min_budget != ANY && record.wage_ceiling() < self.min_budget {
            return false;
        }

        if self.min_rating != ANY_RATING {
            if let Some(rating) = record.rating() {
                if rating < self.min_rating {
                    return false;
                }
            }
        }

        if self.verified_only && !record.is_verified() {
            return false;
        }

        if let Some(status) = self.status {
            if let Some(record_status) = record.status() {
                if record_status != status {
                    return false;
                }
            }
        }

        if self.max_distance_km != ANY {
            if let Some(distance) = record.distance_km() {
                if distance > self.max_distance_km {
                    return false;
                }
            }
        }

        if self.posted_within_days != ANY {
            if let Some(posted_at) = record.posted_at() {
                let cutoff = Utc::now() - Duration::days(i64::from(self.posted_within_days));
                if posted_at < cutoff {
                    return false;
                }
            }
        }

        if self.urgent_only {
            if let Some(urgency) = record.urgency() {
                if urgency != crate::Urgency::High {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Job, Urgency, Worker};

    fn base_worker() -> Worker {
        Worker {
            id: "worker-1".into(),
            name: "Amit Patel".into(),
            category: "Electrician".into(),
            city: "Pune".into(),
            years_of_experience: 5,
            daily_wage_min: 600,
            daily_wage_max: 1100,
            rating_average: 4.2,
            rating_count: 37,
            kyc_verified: true,
            ..Worker::default()
        }
    }

    #[test]
    fn default_filters_match_everything() {
        let filters = SearchFilters::default();
        assert!(filters.matches(&base_worker()));
        assert!(filters.matches(&Job::default()));
    }

    #[test]
    fn category_and_city_are_exact_matches() {
        let filters = SearchFilters {
            category: Some("Electrician".into()),
            city: Some("Pune".into()),
            ..SearchFilters::default()
        };
        assert!(filters.matches(&base_worker()));

        let other_city = SearchFilters {
            city: Some("Mumbai".into()),
            ..SearchFilters::default()
        };
        assert!(!other_city.matches(&base_worker()));

        // Case-sensitive as stored.
        let lowercase = SearchFilters {
            category: Some("electrician".into()),
            ..SearchFilters::default()
        };
        assert!(!lowercase.matches(&base_worker()));
    }

    #[test]
    fn empty_string_means_no_constraint() {
        let filters = SearchFilters {
            category: Some(String::new()),
            city: Some(String::new()),
            ..SearchFilters::default()
        };
        assert!(filters.matches(&base_worker()));
    }

    #[test]
    fn any_sentinel_disables_numeric_bounds() {
        let mut zero_exp = base_worker();
        zero_exp.years_of_experience = 0;

        // min_experience = ANY passes both a rookie and a veteran.
        let filters = SearchFilters {
            min_experience: ANY,
            max_wage: ANY,
            min_rating: ANY_RATING,
            ..SearchFilters::default()
        };
        assert!(filters.matches(&zero_exp));
        assert!(filters.matches(&base_worker()));
    }

    #[test]
    fn numeric_bounds_apply_when_set() {
        let filters = SearchFilters {
            min_experience: 6,
            ..SearchFilters::default()
        };
        assert!(!filters.matches(&base_worker()));

        let filters = SearchFilters {
            max_wage: 500,
            ..SearchFilters::default()
        };
        assert!(!filters.matches(&base_worker()), "wage floor 600 exceeds budget 500");

        let filters = SearchFilters {
            min_rating: 4.5,
            ..SearchFilters::default()
        };
        assert!(!filters.matches(&base_worker()));
    }

    #[test]
    fn verified_only_requires_the_flag() {
        let mut unverified = base_worker();
        unverified.kyc_verified = false;

        let filters = SearchFilters {
            verified_only: true,
            ..SearchFilters::default()
        };
        assert!(filters.matches(&base_worker()));
        assert!(!filters.matches(&unverified));
    }

    #[test]
    fn job_constraints_are_noops_for_workers() {
        let filters = SearchFilters {
            status: Some(JobStatus::New),
            max_distance_km: 5,
            urgent_only: true,
            ..SearchFilters::default()
        };
        assert!(filters.matches(&base_worker()));
    }

    #[test]
    fn job_side_constraints_apply_to_jobs() {
        let job = Job {
            status: JobStatus::Ongoing,
            distance_km: 12,
            urgency: Urgency::Medium,
            ..Job::default()
        };

        let status = SearchFilters {
            status: Some(JobStatus::New),
            ..SearchFilters::default()
        };
        assert!(!status.matches(&job));

        let distance = SearchFilters {
            max_distance_km: 10,
            ..SearchFilters::default()
        };
        assert!(!distance.matches(&job));

        let urgent = SearchFilters {
            urgent_only: true,
            ..SearchFilters::default()
        };
        assert!(!urgent.matches(&job));
    }

    #[test]
    fn min_budget_requires_the_ceiling_to_reach_it() {
        let job = Job {
            budget_min: 500,
            budget_max: 900,
            ..Job::default()
        };

        let too_high = SearchFilters {
            min_budget: 1000,
            ..SearchFilters::default()
        };
        assert!(!too_high.matches(&job));

        let within = SearchFilters {
            min_budget: 900,
            ..SearchFilters::default()
        };
        assert!(within.matches(&job));

        let unset = SearchFilters {
            min_budget: ANY,
            ..SearchFilters::default()
        };
        assert!(unset.matches(&job));
    }

    #[test]
    fn posted_within_days_uses_a_rolling_cutoff() {
        let recent = Job {
            posted_at: Utc::now() - Duration::hours(20),
            ..Job::default()
        };
        let stale = Job {
            posted_at: Utc::now() - Duration::days(6),
            ..Job::default()
        };

        let filters = SearchFilters {
            posted_within_days: 2,
            ..SearchFilters::default()
        };
        assert!(filters.matches(&recent));
        assert!(!filters.matches(&stale));
    }
}
