/// Extract the numeric amount from a percentage-formatted string.
///
/// Matches digits (optionally with a decimal part) followed by a percent
/// sign, anchored at the start of the trimmed input. Trailing content after
/// the percent sign is ignored ("95% of cases" -> 95.0). Anything else,
/// including an empty string or a `%` before the digits, yields `None`.
///
/// Percentage strings come from a generative model and are not guaranteed
/// well-formed, so malformed input is an expected case, not an error.
pub fn extract_percentage(value: &str) -> Option<f64> {
    let re = regex::Regex::new(r"^(\d+(\.\d+)?)%").expect("Invalid regex");

    if let Some(caps) = re.captures(value.trim()) {
        if let Some(amount) = caps.get(1) {
            return amount.as_str().parse::<f64>().ok();
        }
    }
    None
}
