use crate::model::entry::RawEntry;

/// Upstream classification for physical rides.
pub const ATTRACTION_TYPE: &str = "Attraction";

/// Keep only complete attraction entries, in input order.
///
/// `_include_entertainment` is accepted for callers that pass it through, but
/// entertainment entries are never returned.
pub fn filter(entries: Vec<RawEntry>, _include_entertainment: bool) -> Vec<RawEntry> {
    entries.into_iter().filter(is_ride).collect()
}

pub fn is_ride(entry: &RawEntry) -> bool {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    present(&entry.id)
        && present(&entry.name)
        && entry.type_field.as_deref() == Some(ATTRACTION_TYPE)
}
