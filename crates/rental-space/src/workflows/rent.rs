/// Weekly rent expressed over two weeks.
pub fn fortnightly_rent(weekly: f64) -> f64 {
    weekly * 2.0
}

/// Weekly rent spread over a 30-day month.
pub fn monthly_rent(weekly: f64) -> f64 {
    weekly / 7.0 * 30.0
}
