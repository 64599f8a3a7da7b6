use regex::Regex;
use std::sync::LazyLock;

/// UK outward code: one or two letters, a digit, then an optional letter
/// or digit, as a whole word.
static OUTWARD_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,2}[0-9][A-Z0-9]?\b").unwrap());

/// First outward code found in a free-text location, uppercased.
pub fn outward_code(location: &str) -> Option<String> {
    let location = location.to_uppercase();
    OUTWARD_CODE
        .find(&location)
        .map(|found| found.as_str().to_string())
}

/// Uppercased tail of a location starting at its outward code, normally
/// the whole postcode ("BR5 9AB").
pub fn full_postcode(location: &str) -> Option<String> {
    let location = location.to_uppercase();
    OUTWARD_CODE
        .find(&location)
        .map(|found| location[found.start()..].trim().to_string())
}

/// Whether a location falls in a postcode area.
///
/// The area is trimmed and uppercased; an empty area matches every
/// location. Otherwise the location's outward code must start with it.
pub fn matches_area(location: &str, area: &str) -> bool {
    let area = area.trim().to_uppercase();
    if area.is_empty() {
        return true;
    }

    outward_code(location).is_some_and(|code| code.starts_with(&area))
}
