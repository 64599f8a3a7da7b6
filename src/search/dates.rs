use crate::models::AddedDate;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// 1-based index of an English month name, ignoring case. 0 when unknown.
pub fn month_index(name: &str) -> u32 {
    let name = name.trim().to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map_or(0, |i| i as u32 + 1)
}

/// Turn a catalog added-date into `YYYY-MM-DD`.
///
/// Returns `None` unless day, month and year are all present and the month
/// name is recognised. Zero day or year counts as missing. The output is
/// zero padded so string order is date order.
pub fn normalize(added: Option<&AddedDate>) -> Option<String> {
    let added = added?;
    let year = added.year.filter(|y| *y != 0)?;
    let month = added.month.as_deref().map(month_index).filter(|m| *m != 0)?;
    let day = added.day.filter(|d| *d != 0)?;

    Some(format!("{year:04}-{month:02}-{day:02}"))
}
