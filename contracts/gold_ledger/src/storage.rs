use crate::types::{DataKey, InvestmentContract};
use soroban_sdk::{Address, Env, Vec};

pub struct Storage;

impl Storage {
    // Owner
    pub fn get_owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    // Initialization flag
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    // Matured-principal policy
    pub fn reinvest_matured(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::ReinvestMatured)
            .unwrap_or(false)
    }

    pub fn set_reinvest_matured(env: &Env, reinvest: bool) {
        env.storage()
            .instance()
            .set(&DataKey::ReinvestMatured, &reinvest);
    }

    // Contracts, insertion order preserved
    pub fn get_contracts(env: &Env) -> Vec<InvestmentContract> {
        env.storage()
            .persistent()
            .get(&DataKey::Contracts)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn set_contracts(env: &Env, contracts: &Vec<InvestmentContract>) {
        env.storage().persistent().set(&DataKey::Contracts, contracts);
    }

    // Contract ID counter
    pub fn next_contract_id(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::NextContractId)
            .unwrap_or(1)
    }

    pub fn bump_contract_id(env: &Env) {
        let current = Self::next_contract_id(env);
        env.storage()
            .instance()
            .set(&DataKey::NextContractId, &(current + 1));
    }

    pub fn reset_contract_id(env: &Env) {
        env.storage().instance().set(&DataKey::NextContractId, &1u64);
    }

    // Simulation clock
    pub fn simulation_year(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::SimulationYear)
            .unwrap_or(0)
    }

    pub fn set_simulation_year(env: &Env, year: u32) {
        env.storage()
            .instance()
            .set(&DataKey::SimulationYear, &year);
    }

    // Available funds
    pub fn available_funds(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::AvailableFunds)
            .unwrap_or(0)
    }

    pub fn set_available_funds(env: &Env, funds: i128) {
        env.storage()
            .instance()
            .set(&DataKey::AvailableFunds, &funds);
    }
}
