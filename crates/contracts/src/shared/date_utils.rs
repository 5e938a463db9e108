//! Date helpers for the birthdate selectors

/// Day-of-month selector values.
///
/// Always 1..=31: the list does not shrink for short months or February.
pub fn day_of_month_options() -> Vec<u32> {
    (1..=31).collect()
}

/// Zero-pad a day to two characters: 5 -> "05", 15 -> "15"
pub fn format_day(day: u32) -> String {
    format!("{:02}", day)
}
