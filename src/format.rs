//! Metric formatters
//!
//! Rounding and display helpers shared by the generators and the page
//! bindings. All inputs are finite, non-negative demo values.

/// Round to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `"2345 ft"`
pub fn feet(value: f64) -> String {
    format!("{} ft", value.round())
}

/// `"47°"`
pub fn degrees(value: f64) -> String {
    format!("{}°", value.round())
}

/// `"12.3°"`
pub fn degrees_1dp(value: f64) -> String {
    format!("{value:.1}°")
}

/// `"97.4%"`
pub fn percent_1dp(value: f64) -> String {
    format!("{value:.1}%")
}

/// `"18.2%"` for values that are already rounded
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

/// `"91% confidence"`
pub fn confidence_label(value: f64) -> String {
    format!("{}% confidence", value.round())
}
