//! Name filtering shared by all list commands

/// Case-insensitive substring match on a resource name.
///
/// Both sides are lowercased before comparison. An empty pattern matches
/// everything, so unfiltered listings pass through unchanged.
pub fn name_matches(name: &str, pattern: &str) -> bool {
    name.to_lowercase().contains(&pattern.to_lowercase())
}
