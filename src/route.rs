//! Path template matching
//!
//! Decides whether a spec path template and an override path denote the
//! same route. This is a structural match only: a `{name}` placeholder
//! segment accepts any concrete value, but nothing is extracted or
//! validated.

/// Returns true when `override_path` fits the shape of `spec_path`.
///
/// Both paths are split on `/` and must have the same number of segments.
/// Segments are compared pairwise, skipping the leading empty segment;
/// a spec segment containing `{` accepts any override value at that
/// position.
pub fn templates_match(spec_path: &str, override_path: &str) -> bool {
    let spec: Vec<&str> = spec_path.split('/').collect();
    let overridden: Vec<&str> = override_path.split('/').collect();

    if spec.len() != overridden.len() {
        return false;
    }

    spec.iter()
        .zip(&overridden)
        .skip(1)
        .all(|(s, o)| s == o || s.contains('{'))
}
