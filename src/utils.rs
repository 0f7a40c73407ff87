use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for cook time parsing
static COOK_BARE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)$").unwrap());
static COOK_HOURS_MINUTES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(\d+)\s*(?:h|hrs?|hours?))?\s*(?:(\d+)\s*(?:m|mins?|minutes?))?$").unwrap()
});

/// Parse a free-form cook time into whole minutes.
///
/// Supported formats:
/// - Bare number: "30" (minutes)
/// - Minutes: "30 minutes", "45 min", "20m"
/// - Hours: "1 hour", "2 hrs", "1h"
/// - Both: "1 hour 15 minutes", "1h 30m", "1h30m"
///
/// Returns `None` for anything else, including an empty string.
///
/// # Examples
/// ```
/// use recipe_finder::utils::parse_cook_minutes;
/// assert_eq!(parse_cook_minutes("30 minutes"), Some(30));
/// assert_eq!(parse_cook_minutes("1h 30m"), Some(90));
/// assert_eq!(parse_cook_minutes("soon"), None);
/// ```
pub fn parse_cook_minutes(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(captures) = COOK_BARE_REGEX.captures(trimmed) {
        return captures[1].parse().ok();
    }

    let captures = COOK_HOURS_MINUTES_REGEX.captures(trimmed)?;
    let hours = captures.get(1);
    let minutes = captures.get(2);
    if hours.is_none() && minutes.is_none() {
        return None;
    }

    let hours: u32 = match hours {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u32 = match minutes {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Render a match percentage as a whole number, rounding halves away from zero.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.0}%", percentage.round())
}

/// Join names for display ("a, b, c").
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}
