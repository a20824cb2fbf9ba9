//! Number formatting for display

/// Floor a value and insert thousands separators: `1234567.9` → `"1,234,567"`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let floored = value.floor();
    let digits = format!("{:.0}", floored.abs());
    let grouped = group_thousands(&digits);
    if floored < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Thousands separators with up to three decimals kept: `1500.7` → `"1,500.7"`
///
/// For echoing inputs back, where flooring would hide what the engine uses.
pub fn format_input(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if value < 0.0 && out != "0" {
        out.insert(0, '-');
    }
    out
}

/// Format a damage total with thousands separators
pub fn format_damage(damage: u64) -> String {
    group_thousands(&damage.to_string())
}

/// Fixed number of decimals
pub fn format_decimals(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Percentage with a `%` suffix: `12.5` → `"12.50%"` for 2 decimals
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
