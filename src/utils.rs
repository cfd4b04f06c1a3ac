//! Shared numeric helpers for the force plate report

/// Round a value to one decimal place
///
/// Rounds the exact binary value, so `0.35` (stored just below) goes down
/// and exact ties such as `1.25` go to the even digit.
///
/// # Examples
///
/// ```
/// use force_plate_report::utils::round_to_tenth;
///
/// assert_eq!(round_to_tenth(50.0), 50.0);
/// assert_eq!(round_to_tenth(12.34), 12.3);
/// assert_eq!(round_to_tenth(12.36), 12.4);
/// assert_eq!(round_to_tenth(12.25), 12.2);
/// ```
pub fn round_to_tenth(value: f64) -> f64 {
    // Scaling by 10 first would turn near-ties like 0.35 into exact ties
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Euclidean magnitude of the two horizontal/vertical force components,
/// rounded to one decimal place
pub fn resultant_force(fx: f64, fz: f64) -> f64 {
    round_to_tenth((fx * fx + fz * fz).sqrt())
}

/// Expand a two-digit year token ("24") to four digits ("2024")
///
/// Any other length is returned unchanged.
///
/// # Examples
///
/// ```
/// use force_plate_report::utils::expand_two_digit_year;
///
/// assert_eq!(expand_two_digit_year("24"), "2024");
/// assert_eq!(expand_two_digit_year("2024"), "2024");
/// ```
pub fn expand_two_digit_year(year: &str) -> String {
    if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    }
}
