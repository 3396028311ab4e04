use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // VALIDATION ERRORS (10-19)
    // ============================================
    /// Capital below the minimum commitment
    CapitalBelowMinimum = 10,
    /// Duration not in the supported set
    InvalidDuration = 11,

    // ============================================
    // FUNDS ERRORS (20-29)
    // ============================================
    /// Requested principal exceeds available portfolio funds
    InsufficientFunds = 20,

    // ============================================
    // LOOKUP ERRORS (30-39)
    // ============================================
    /// No contract with the given ID
    ContractNotFound = 30,

    // ============================================
    // ARITHMETIC ERRORS (40-49)
    // ============================================
    /// Arithmetic overflow
    Overflow = 40,
}
