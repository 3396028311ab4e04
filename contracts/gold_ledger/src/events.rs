use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug)]
pub struct EngineInitializedEvent {
    pub reinvest_matured: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContractCreatedEvent {
    pub contract_id: u64,
    pub principal: i128,
    pub duration_years: u32,
    pub annual_rate_percent: u32,
    pub annual_return: i128,
    pub funded_from_portfolio: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct YearAdvancedEvent {
    pub simulation_year: u32,
    pub returns_credited: i128,
    pub newly_completed: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerResetEvent {
    pub contracts_cleared: u32,
}
