/// Time-of-day portion of an API timestamp: everything after the first space.
///
/// - `"2024-01-01 09:30:00"` -> `"09:30:00"`
/// - `"2024-01-01"` -> `""`
pub fn time_of_day_label(datetime: &str) -> &str {
    datetime.split_once(' ').map(|(_, time)| time).unwrap_or("")
}
