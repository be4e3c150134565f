//! Free-text sanitisation.

/// Trims surrounding whitespace and strips every `<` and `>`.
///
/// # Example
///
/// ```
/// use fund_disbursement::validation::sanitize_text;
///
/// assert_eq!(sanitize_text("  <b>Night shift</b> "), "bNight shift/b");
/// ```
pub fn sanitize_text(input: &str) -> String {
    input.trim().chars().filter(|c| *c != '<' && *c != '>').collect()
}

/// Sanitises an optional field, leaving `None` untouched.
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize_text)
}
