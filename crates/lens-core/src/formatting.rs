use chrono::NaiveDate;

/// Placeholder rendered for any missing numeric or date value.
pub const MISSING_VALUE: &str = "–";

/// Format a floating-point number with thousands separators and a fixed
/// number of decimal places.
///
/// # Examples
///
/// ```
/// use lens_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(950000.0, 0), "950,000");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    // Group on the absolute value so the sign doesn't interfere.
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Nudge by half an ULP at the target precision before rounding to avoid
    // IEEE 754 binary-representation surprises at exact midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let grouped = group_thousands(&integer_part.to_string());

    let result = if decimals == 0 {
        grouped
    } else {
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` is "0.50"-shaped; keep everything from the dot.
        format!("{}{}", grouped, &frac_str[1..])
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format an AUD amount the way the dashboard displays prices: a dollar sign,
/// thousands grouping, no cents.
///
/// # Examples
///
/// ```
/// use lens_core::formatting::format_aud;
///
/// assert_eq!(format_aud(950000.0), "$950,000");
/// assert_eq!(format_aud(0.0), "$0");
/// ```
pub fn format_aud(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${}", format_number(amount.abs(), 0))
    } else {
        format!("${}", format_number(amount, 0))
    }
}

/// Format a rate as dollars per square metre, e.g. `"$1,565/sqm"`.
pub fn format_aud_per_sqm(amount: f64) -> String {
    format!("{}/sqm", format_aud(amount))
}

/// Display form of a listing date, e.g. `"03 Oct 2025"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Insert a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}
