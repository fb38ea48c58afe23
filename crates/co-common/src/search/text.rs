use super::Record;

/// Case-insensitive substring match over a record's fixed text fields.
///
/// This is deliberately the weak search semantic the product shipped with:
/// literal containment, no tokenization, no fuzzy matching. An empty or
/// whitespace-only query matches every record.
pub fn matches<R: Record>(record: &R, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record
        .text_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
