//! Number parsing for chat input. Accepts `.` and `,` as the decimal separator.

/// Parses `raw` as a finite number after trimming and replacing `,` with `.`.
/// Returns `None` for empty, non-numeric, `inf` or `NaN` input.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
