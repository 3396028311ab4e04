//! Fixed rate table and annual-return arithmetic.
//!
//! Rates are compile-time constants keyed by contract duration; a contract's
//! annual return is computed once at creation and cached on the contract.

/// Annual rate in percent for a supported duration.
///
/// | years | rate % |
/// |-------|--------|
/// | 3     | 9      |
/// | 5     | 12     |
/// | 8     | 13     |
/// | 10    | 14     |
/// | 12    | 15     |
/// | 15    | 16     |
///
/// Returns `None` for any duration outside the table.
pub fn rate_for_duration(duration_years: u32) -> Option<u32> {
    match duration_years {
        3 => Some(9),
        5 => Some(12),
        8 => Some(13),
        10 => Some(14),
        12 => Some(15),
        15 => Some(16),
        _ => None,
    }
}

/// Annual return = round(principal × rate / 100), rounded half up.
///
/// Example:
/// - principal: 5,000, rate: 9% → 450
/// - principal: 10,000, rate: 12% → 1,200
pub fn annual_return(principal: i128, rate_percent: u32) -> Option<i128> {
    // principal is validated positive, so +50 before the division
    // gives half-up rounding
    principal
        .checked_mul(rate_percent as i128)?
        .checked_add(50)?
        .checked_div(100)
}
