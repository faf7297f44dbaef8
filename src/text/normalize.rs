/// Canonical comparison form of free text.
///
/// Lowercases, turns every character outside `[a-z0-9]` and whitespace into a
/// space, collapses whitespace runs and trims. Total and idempotent.
pub fn normalize(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    // Collapse whitespace
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase + trim, the comparison form used for option values and labels.
pub fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}
