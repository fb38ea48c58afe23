use super::{filters::SearchFilters, sort, text, Record};

/// Single query entry point: text match, then attribute predicates, then
/// a stable sort by `filters.sort_by`.
///
/// Pure and total: the input store is never mutated, no input can fail,
/// and an empty store or an over-constrained query yields an empty vec.
pub fn search<R: Record + Clone>(records: &[R], query: &str, filters: &SearchFilters) -> Vec<R> {
    let mut results: Vec<R> = records
        .iter()
        .filter(|record| text::matches(*record, query))
        .filter(|record| filters.matches(*record))
        .cloned()
        .collect();

    sort::sort_records(&mut results, filters.sort_by);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SortKey, ANY};
    use crate::store::generate_workers;
    use crate::Worker;

    fn two_city_store() -> Vec<Worker> {
        vec![
            Worker {
                id: "worker-1".into(),
                name: "Rajesh Kumar".into(),
                category: "Plumber".into(),
                city: "Mumbai".into(),
                rating_average: 4.5,
                daily_wage_min: 500,
                daily_wage_max: 900,
                ..Worker::default()
            },
            Worker {
                id: "worker-2".into(),
                name: "Anjali Gupta".into(),
                category: "Electrician".into(),
                city: "Pune".into(),
                rating_average: 4.8,
                daily_wage_min: 700,
                daily_wage_max: 1200,
                ..Worker::default()
            },
        ]
    }

    #[test]
    fn category_filter_selects_only_that_category() {
        let filters = SearchFilters {
            category: Some("Plumber".into()),
            ..SearchFilters::default()
        };
        let results = search(&two_city_store(), "", &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "worker-1");
    }

    #[test]
    fn default_sort_is_rating_descending() {
        let results = search(&two_city_store(), "", &SearchFilters::default());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "worker-2"); // 4.8 before 4.5
        assert_eq!(results[1].id, "worker-1");
    }

    #[test]
    fn no_filter_search_is_a_reorder_only() {
        let store = generate_workers(30, 5);
        let results = search(&store, "", &SearchFilters::default());

        assert_eq!(results.len(), store.len());
        for worker in &store {
            assert!(results.contains(worker), "{} missing from results", worker.id);
        }
    }

    #[test]
    fn search_is_idempotent_over_its_own_output() {
        let store = generate_workers(30, 6);
        let first = search(&store, "", &SearchFilters::default());
        let second = search(&first, "", &SearchFilters::default());
        assert_eq!(first, second);
    }

    #[test]
    fn adding_a_constraint_never_grows_the_result() {
        let store = generate_workers(50, 7);
        let loose = SearchFilters::default();
        let baseline = search(&store, "", &loose).len();

        for min_rating in [3.0, 3.5, 4.0, 4.5] {
            let tightened = SearchFilters {
                min_rating,
                ..loose.clone()
            };
            let count = search(&store, "", &tightened).len();
            assert!(count <= baseline, "min_rating {min_rating} grew the result set");
        }

        let verified = SearchFilters {
            verified_only: true,
            min_rating: 4.0,
            ..loose
        };
        assert!(search(&store, "", &verified).len() <= baseline);
    }

    #[test]
    fn wage_low_result_is_ordered_by_wage_floor() {
        let store = generate_workers(50, 8);
        let filters = SearchFilters {
            sort_by: SortKey::WageLow,
            ..SearchFilters::default()
        };
        let results = search(&store, "", &filters);
        assert!(results
            .windows(2)
            .all(|pair| pair[0].daily_wage_min <= pair[1].daily_wage_min));
    }

    #[test]
    fn text_query_composes_with_filters() {
        let filters = SearchFilters {
            min_experience: ANY,
            ..SearchFilters::default()
        };
        let results = search(&two_city_store(), "plumb", &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, "Plumber");
    }

    #[test]
    fn empty_store_yields_empty_result() {
        let results = search(&Vec::<Worker>::new(), "anything", &SearchFilters::default());
        assert!(results.is_empty());
    }
}
