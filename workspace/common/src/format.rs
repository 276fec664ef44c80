//! Display helpers for KPI values.

/// Formats an integer with comma thousands separators ("21375" -> "21,375").
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats a whole dollar amount the way the KPI cards show it ("$24,254").
pub fn format_dollars(value: u64) -> String {
    format!("${}", format_count(value))
}
