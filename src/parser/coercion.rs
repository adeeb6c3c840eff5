//! Tolerant field coercion
//!
//! Converts fixed-width substrings into typed values. None of these
//! functions fail: anything that cannot be converted becomes `None`.

use chrono::NaiveDate;

/// Parse a trimmed integer, or `None`
pub fn to_int(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Parse a trimmed float, or `None`
pub fn to_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Keep a non-blank string
///
/// Trimming only decides emptiness. A non-blank value is returned exactly as
/// given, surrounding whitespace included.
pub fn to_string(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a `YYYY?MM?DD` date by position
///
/// Year is read from chars 0..4, month from chars 5..7 and day from char 8 to
/// the end; the separators are never inspected. Each part is trimmed before
/// parsing and the result must be a real calendar date in years 1 to 9999.
pub fn to_date(value: &str) -> Option<NaiveDate> {
    let chars: Vec<char> = value.chars().collect();
    let part = |start: usize, end: usize| -> String {
        let end = end.min(chars.len());
        let start = start.min(end);
        chars[start..end].iter().collect()
    };

    let year = part(0, 4)
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|year| (1..=9999).contains(year))?;
    let month = part(5, 7).trim().parse::<u32>().ok()?;
    let day = part(8, chars.len()).trim().parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
