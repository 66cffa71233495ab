//! Number formatting shared by chart labels and the markdown report.

/// Round to a whole number and group digits: `1790000.4` → `1,790,000`.
pub fn thousands(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" after rounding a tiny negative
    if grouped == "0" {
        return grouped;
    }
    format!("{sign}{grouped}")
}

/// `12.345` → `12.35 ms`
pub fn millis(value: f64, precision: usize) -> String {
    format!("{value:.precision$} ms")
}

/// `1.25` → `1.25%`
pub fn percent(value: f64, precision: usize) -> String {
    format!("{value:.precision$}%")
}
