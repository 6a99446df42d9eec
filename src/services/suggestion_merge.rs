use crate::models::suggestion::ActivitySuggestion;

/// Appends `supplemental` to `primary`, skipping near-duplicate names, and caps
/// the result at `max_count`. `primary` is kept as-is and in order.
pub fn merge(
    primary: Vec<ActivitySuggestion>,
    supplemental: Vec<ActivitySuggestion>,
    max_count: usize,
) -> Vec<ActivitySuggestion> {
    let mut merged = primary;

    for candidate in supplemental {
        if merged.len() >= max_count {
            break;
        }
        if !merged.iter().any(|existing| is_duplicate(existing, &candidate)) {
            merged.push(candidate);
        }
    }

    merged.truncate(max_count);
    merged
}

/// Two suggestions are duplicates when either name contains the other,
/// ignoring case.
pub fn is_duplicate(a: &ActivitySuggestion, b: &ActivitySuggestion) -> bool {
    let a = a.name.to_lowercase();
    let b = b.name.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
