//! Optional natural-language assist in front of the literal engine.
//!
//! The parser seam covers the product's voice/AI search: an external
//! service turns "I need a plumber for bathroom leak repair" into
//! structured hints. The contract that matters here is the fallback —
//! when the service fails, the raw input degrades to a plain substring
//! query and the search still succeeds.

use thiserror::Error;

use super::{engine::search, filters::SearchFilters, Record};

/// Structured hints extracted from a free-form request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryHints {
    pub category: Option<String>,
    pub city: Option<String>,
    /// Replacement query text, when the parser can strip filler words.
    pub cleaned_query: Option<String>,
}

#[derive(Debug, Error)]
pub enum HintError {
    #[error("hint service unavailable: {0}")]
    Unavailable(String),
    #[error("could not parse query: {0}")]
    Unparseable(String),
}

/// External query-understanding service (AI/voice backend). Out of scope
/// here; implementations live behind this seam.
pub trait QueryHintParser {
    fn parse(&self, raw: &str) -> Result<QueryHints, HintError>;
}

/// Run a search with optional parser assistance.
///
/// Hints refine the filter set (category/city) and may replace the query
/// text. Any parser failure falls back to literal substring search over
/// the raw input; this path never errors.
pub fn search_assisted<R: Record + Clone>(
    records: &[R],
    raw: &str,
    filters: &SearchFilters,
    parser: Option<&dyn QueryHintParser>,
) -> Vec<R> {
    let Some(parser) = parser else {
        return search(records, raw, filters);
    };

    match parser.parse(raw) {
        Ok(hints) => {
            let mut refined = filters.clone();
            if hints.category.is_some() {
                refined.category = hints.category;
            }
            if hints.city.is_some() {
                refined.city = hints.city;
            }
            let query = hints.cleaned_query.as_deref().unwrap_or(raw);
            search(records, query, &refined)
        }
        Err(err) => {
            tracing::warn!(error = %err, "query hint parser failed; using literal search");
            search(records, raw, filters)
        }
    }
}
