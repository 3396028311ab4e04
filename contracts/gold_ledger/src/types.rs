use soroban_sdk::{contracttype, Vec};

// Constants
pub const MIN_CAPITAL: i128 = 5_000; // Minimum capital per contract

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContractStatus {
    /// Contract is accruing returns each simulated year
    Active = 0,
    /// Contract reached its full duration; no further accrual
    Completed = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentContract {
    /// Unique contract ID, assigned monotonically at creation
    pub id: u64,
    /// Capital committed at creation, fixed for the contract's lifetime
    pub principal: i128,
    /// Contract duration, one of the supported durations
    pub duration_years: u32,
    /// Annual rate in percent, fixed by duration at creation
    pub annual_rate_percent: u32,
    /// round(principal × rate / 100), computed once and cached
    pub annual_return: i128,
    /// Simulated years this contract has accrued, capped at duration_years
    pub years_elapsed: u32,
    /// Running sum of annual_return, frozen once Completed
    pub total_accrued: i128,
    /// Current contract status
    pub status: ContractStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PortfolioSnapshot {
    pub contracts: Vec<InvestmentContract>,
    pub simulation_year: u32,
    pub available_funds: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Aggregates {
    /// Sum of principal over all contracts
    pub total_invested: i128,
    /// Sum of total_accrued over all contracts
    pub total_accrued_returns: i128,
    pub active_count: u32,
    pub completed_count: u32,
    /// Accrued returns plus principal of completed contracts
    /// (capital is returned to the client only at maturity)
    pub total_returned_to_client: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Initialized,
    ReinvestMatured,
    Contracts,        // ordered Vec<InvestmentContract>, insertion order
    NextContractId,
    SimulationYear,
    AvailableFunds,
}
