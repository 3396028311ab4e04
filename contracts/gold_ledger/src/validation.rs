use crate::error::Error;
use crate::rates;
use crate::types::MIN_CAPITAL;

/// Capital must meet the minimum commitment.
pub fn check_capital(principal: i128) -> Result<(), Error> {
    if principal < MIN_CAPITAL {
        return Err(Error::CapitalBelowMinimum);
    }
    Ok(())
}

/// Duration must be one of the supported durations in the rate table.
pub fn check_duration(duration_years: u32) -> Result<(), Error> {
    if rates::rate_for_duration(duration_years).is_none() {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

/// The first contract is funded externally; every later contract draws on
/// accrued portfolio funds and must fit within them.
pub fn check_funding(
    principal: i128,
    is_first_contract: bool,
    available_funds: i128,
) -> Result<(), Error> {
    if !is_first_contract && principal > available_funds {
        return Err(Error::InsufficientFunds);
    }
    Ok(())
}
