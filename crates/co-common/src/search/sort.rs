use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Record;

/// Named sort strategy: selects both the comparison field and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Best-rated first.
    #[default]
    Rating,
    /// Most experienced first.
    Experience,
    /// Cheapest asking-price floor first.
    WageLow,
    /// Highest price ceiling first.
    WageHigh,
}

/// Stable in-place sort by the given key; equal keys retain input order.
/// Records without the keyed attribute compare equal to each other and
/// sort as zero against records that have it.
pub fn sort_records<R: Record>(records: &mut [R], key: SortKey) {
    match key {
        SortKey::Rating => records.sort_by(|a, b| cmp_rating_desc(a, b)),
        SortKey::Experience => {
            records.sort_by(|a, b| {
                b.experience_years()
                    .unwrap_or(0)
                    .cmp(&a.experience_years().unwrap_or(0))
            });
        }
        SortKey::WageLow => records.sort_by(|a, b| a.wage_floor().cmp(&b.wage_floor())),
        SortKey::WageHigh => records.sort_by(|a, b| b.wage_ceiling().cmp(&a.wage_ceiling())),
    }
}

fn cmp_rating_desc<R: Record>(a: &R, b: &R) -> Ordering {
    let a = a.rating().unwrap_or(0.0);
    let b = b.rating().unwrap_or(0.0);
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Worker;

    fn worker(id: &str, rating: f32, experience: u32, wage: (u32, u32)) -> Worker {
        Worker {
            id: id.into(),
            rating_average: rating,
            years_of_experience: experience,
            daily_wage_min: wage.0,
            daily_wage_max: wage.1,
            ..Worker::default()
        }
    }

    fn ids(workers: &[Worker]) -> Vec<&str> {
        workers.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn rating_sorts_descending() {
        let mut records = vec![
            worker("a", 4.5, 2, (500, 900)),
            worker("b", 4.8, 1, (700, 1000)),
            worker("c", 3.9, 9, (400, 800)),
        ];
        sort_records(&mut records, SortKey::Rating);
        assert_eq!(ids(&records), ["b", "a", "c"]);
    }

    #[test]
    fn experience_sorts_descending() {
        let mut records = vec![
            worker("a", 4.5, 2, (500, 900)),
            worker("b", 4.8, 12, (700, 1000)),
            worker("c", 3.9, 9, (400, 800)),
        ];
        sort_records(&mut records, SortKey::Experience);
        assert_eq!(ids(&records), ["b", "c", "a"]);
    }

    #[test]
    fn wage_low_sorts_by_floor_ascending() {
        let mut records = vec![
            worker("a", 4.5, 2, (500, 900)),
            worker("b", 4.8, 12, (700, 1000)),
            worker("c", 3.9, 9, (400, 800)),
        ];
        sort_records(&mut records, SortKey::WageLow);
        assert_eq!(ids(&records), ["c", "a", "b"]);
        assert!(records
            .windows(2)
            .all(|pair| pair[0].daily_wage_min <= pair[1].daily_wage_min));
    }

    #[test]
    fn wage_high_sorts_by_ceiling_descending() {
        let mut records = vec![
            worker("a", 4.5, 2, (500, 900)),
            worker("b", 4.8, 12, (700, 1000)),
            worker("c", 3.9, 9, (400, 800)),
        ];
        sort_records(&mut records, SortKey::WageHigh);
        assert_eq!(ids(&records), ["b", "a", "c"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut records = vec![
            worker("first", 4.0, 5, (500, 900)),
            worker("second", 4.0, 5, (500, 900)),
            worker("third", 4.0, 5, (500, 900)),
        ];
        sort_records(&mut records, SortKey::Rating);
        assert_eq!(ids(&records), ["first", "second", "third"]);

        sort_records(&mut records, SortKey::WageLow);
        assert_eq!(ids(&records), ["first", "second", "third"]);
    }

    #[test]
    fn sort_key_parses_from_snake_case() {
        let key: SortKey = serde_json::from_str("\"wage_low\"").unwrap();
        assert_eq!(key, SortKey::WageLow);
        assert_eq!(SortKey::default(), SortKey::Rating);
    }
}
