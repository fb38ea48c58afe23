//! Seeded dummy-data store standing in for the real backend.
//!
//! Records are generated once at process start and immutable afterwards.
//! Structure is deterministic for any seed; exact values are deterministic
//! only for a fixed seed.

use chrono::{Duration, Utc};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{
    sub_skills_for, titles_for, CATEGORIES, CITIES, JOB_DESCRIPTIONS, LANGUAGES, PERSON_NAMES,
};
use crate::{Job, JobStatus, Urgency, Worker};

pub const DEFAULT_WORKER_COUNT: usize = 40;
pub const DEFAULT_JOB_COUNT: usize = 50;

/// In-memory record collections, read-only at query time.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pub workers: Vec<Worker>,
    pub jobs: Vec<Job>,
}

impl RecordStore {
    pub fn generate(worker_count: usize, job_count: usize, seed: u64) -> Self {
        Self {
            workers: generate_workers(worker_count, seed),
            // Offset keeps the two collections from mirroring each other's draws.
            jobs: generate_jobs(job_count, seed.wrapping_add(1)),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::generate(DEFAULT_WORKER_COUNT, DEFAULT_JOB_COUNT, seed)
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty() && self.jobs.is_empty()
    }
}

/// Process-wide store, built on first access with a fresh random seed
/// (the original app regenerated its dummy data on every start).
pub static DEFAULT_STORE: Lazy<RecordStore> = Lazy::new(|| RecordStore::seeded(rand::random()));

pub fn generate_workers(count: usize, seed: u64) -> Vec<Worker> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut workers = Vec::with_capacity(count);

    for i in 0..count {
        let category = *CATEGORIES.choose(&mut rng).unwrap();
        let wage_min = rng.gen_range(300..=1200);
        // Tenth-of-a-star resolution, capped inside [0.0, 5.0].
        let rating = (rng.gen_range(20..=50) as f32) / 10.0;

        let skill_pool = sub_skills_for(category);
        let skill_count = rng.gen_range(2..=3);
        let sub_skills = skill_pool
            .choose_multiple(&mut rng, skill_count)
            .map(|s| s.to_string())
            .collect();

        let language_count = rng.gen_range(1..=3);
        let languages = LANGUAGES
            .choose_multiple(&mut rng, language_count)
            .map(|s| s.to_string())
            .collect();

        workers.push(Worker {
            id: format!("worker-{}", i + 1),
            name: PERSON_NAMES.choose(&mut rng).unwrap().to_string(),
            category: category.to_string(),
            city: CITIES.choose(&mut rng).unwrap().to_string(),
            years_of_experience: rng.gen_range(0..=25),
            daily_wage_min: wage_min,
            daily_wage_max: wage_min + rng.gen_range(200..=800),
            rating_average: rating,
            rating_count: rng.gen_range(0..=250),
            kyc_verified: rng.gen_bool(0.7),
            sub_skills,
            languages,
        });
    }

    workers
}

pub fn generate_jobs(count: usize, seed: u64) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::with_capacity(count);

    // Weighted pools: most jobs are still open, urgency skews medium.
    let statuses = [
        JobStatus::New,
        JobStatus::New,
        JobStatus::New,
        JobStatus::Ongoing,
        JobStatus::Completed,
    ];
    let urgencies = [Urgency::Low, Urgency::Medium, Urgency::Medium, Urgency::High];

    let now = Utc::now();

    for i in 0..count {
        let category = *CATEGORIES.choose(&mut rng).unwrap();
        let budget_min = rng.gen_range(500..=2000);
        let hours_ago = rng.gen_range(1..=168); // 1 hour to 7 days

        jobs.push(Job {
            id: format!("job-{}", i + 1),
            title: titles_for(category).choose(&mut rng).unwrap().to_string(),
            description: JOB_DESCRIPTIONS.choose(&mut rng).unwrap().to_string(),
            category: category.to_string(),
            customer_name: PERSON_NAMES.choose(&mut rng).unwrap().to_string(),
            customer_id: format!("customer-{}", rng.gen_range(1..=100)),
            budget_min,
            budget_max: budget_min + rng.gen_range(200..=800),
            city: CITIES.choose(&mut rng).unwrap().to_string(),
            locality: format!("Sector {}", rng.gen_range(1..=50)),
            distance_km: rng.gen_range(1..=30),
            status: *statuses.choose(&mut rng).unwrap(),
            posted_at: now - Duration::hours(hours_ago),
            urgency: *urgencies.choose(&mut rng).unwrap(),
            verified_customer: rng.gen_bool(0.7),
        });
    }

    jobs
}
