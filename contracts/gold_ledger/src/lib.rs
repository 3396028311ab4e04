#![no_std]

mod error;
mod events;
mod rates;
mod storage;
mod types;
mod validation;


use error::Error;
use events::*;
use storage::Storage;
use types::{Aggregates, ContractStatus, InvestmentContract, PortfolioSnapshot};

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

#[contract]
pub struct LedgerEngine;

#[contractimpl]
impl LedgerEngine {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the ledger engine
    ///
    /// `reinvest_matured` selects the matured-principal policy: when set,
    /// the principal of a contract that completes during a year advance is
    /// credited back to available funds; when unset, capital counts only
    /// toward the returned-to-client aggregate.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, owner: Address, reinvest_matured: bool) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        Storage::set_initialized(&env);
        Storage::set_owner(&env, &owner);
        Storage::set_reinvest_matured(&env, reinvest_matured);

        env.events().publish(
            (Symbol::new(&env, "engine_initialized"),),
            EngineInitializedEvent { reinvest_matured },
        );

        Ok(())
    }

    // ============================================
    // FLOW 1: OWNER CREATES A CONTRACT
    // ============================================

    /// Create a new investment contract
    ///
    /// The first contract is funded externally; every subsequent contract
    /// is funded from accrued portfolio funds and debits them.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `CapitalBelowMinimum`: principal below the minimum commitment
    /// - `InvalidDuration`: duration not in the supported set
    /// - `InsufficientFunds`: principal exceeds available funds
    ///   (non-first contracts only)
    /// - `Overflow`: annual return does not fit in i128
    pub fn create_contract(
        env: Env,
        principal: i128,
        duration_years: u32,
    ) -> Result<InvestmentContract, Error> {
        Self::require_owner(&env)?;

        let mut contracts = Storage::get_contracts(&env);
        let is_first_contract = contracts.is_empty();
        let available_funds = Storage::available_funds(&env);

        validation::check_capital(principal)?;
        validation::check_duration(duration_years)?;
        validation::check_funding(principal, is_first_contract, available_funds)?;

        let annual_rate_percent =
            rates::rate_for_duration(duration_years).ok_or(Error::InvalidDuration)?;
        let annual_return =
            rates::annual_return(principal, annual_rate_percent).ok_or(Error::Overflow)?;

        let contract = InvestmentContract {
            id: Storage::next_contract_id(&env),
            principal,
            duration_years,
            annual_rate_percent,
            annual_return,
            years_elapsed: 0,
            total_accrued: 0,
            status: ContractStatus::Active,
        };

        contracts.push_back(contract.clone());
        Storage::set_contracts(&env, &contracts);
        Storage::bump_contract_id(&env);

        if !is_first_contract {
            Storage::set_available_funds(&env, available_funds - principal);
        }

        env.events().publish(
            (Symbol::new(&env, "contract_created"), contract.id),
            ContractCreatedEvent {
                contract_id: contract.id,
                principal,
                duration_years,
                annual_rate_percent,
                annual_return,
                funded_from_portfolio: !is_first_contract,
            },
        );

        Ok(contract)
    }

    // ============================================
    // FLOW 2: OWNER ADVANCES THE SIMULATION YEAR
    // ============================================

    /// Advance the simulation by one year
    ///
    /// Single pass over all contracts: every active contract accrues its
    /// cached annual return and may complete; completed contracts are left
    /// untouched. The returns accrued this year are credited to available
    /// funds. The clock increments even on an empty portfolio.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Overflow`: an accrual sum does not fit in i128
    pub fn advance_year(env: Env) -> Result<PortfolioSnapshot, Error> {
        Self::require_owner(&env)?;

        let mut contracts = Storage::get_contracts(&env);
        let reinvest_matured = Storage::reinvest_matured(&env);

        let mut returns_credited: i128 = 0;
        let mut newly_completed: u32 = 0;

        for i in 0..contracts.len() {
            let mut contract = contracts.get_unchecked(i);
            if contract.status == ContractStatus::Completed {
                continue;
            }

            contract.years_elapsed += 1;
            contract.total_accrued = contract
                .total_accrued
                .checked_add(contract.annual_return)
                .ok_or(Error::Overflow)?;
            returns_credited = returns_credited
                .checked_add(contract.annual_return)
                .ok_or(Error::Overflow)?;

            if contract.years_elapsed >= contract.duration_years {
                contract.status = ContractStatus::Completed;
                newly_completed += 1;

                if reinvest_matured {
                    returns_credited = returns_credited
                        .checked_add(contract.principal)
                        .ok_or(Error::Overflow)?;
                }
            }

            contracts.set(i, contract);
        }

        let available_funds = Storage::available_funds(&env)
            .checked_add(returns_credited)
            .ok_or(Error::Overflow)?;
        let simulation_year = Storage::simulation_year(&env) + 1;

        Storage::set_contracts(&env, &contracts);
        Storage::set_available_funds(&env, available_funds);
        Storage::set_simulation_year(&env, simulation_year);

        env.events().publish(
            (Symbol::new(&env, "year_advanced"), simulation_year),
            YearAdvancedEvent {
                simulation_year,
                returns_credited,
                newly_completed,
            },
        );

        Ok(PortfolioSnapshot {
            contracts,
            simulation_year,
            available_funds,
        })
    }

    // ============================================
    // FLOW 3: OWNER RESETS THE LEDGER
    // ============================================

    /// Reset the portfolio to its initial empty state
    ///
    /// Clears all contracts, the simulation clock, available funds, and the
    /// ID counter. Owner and policy flag survive.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn reset(env: Env) -> Result<(), Error> {
        Self::require_owner(&env)?;

        let contracts_cleared = Storage::get_contracts(&env).len();

        Storage::set_contracts(&env, &Vec::new(&env));
        Storage::set_simulation_year(&env, 0);
        Storage::set_available_funds(&env, 0);
        Storage::reset_contract_id(&env);

        env.events().publish(
            (Symbol::new(&env, "ledger_reset"),),
            LedgerResetEvent { contracts_cleared },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Portfolio aggregates, derived from the contract list on every call
    pub fn get_aggregates(env: Env) -> Aggregates {
        let contracts = Storage::get_contracts(&env);

        let mut aggregates = Aggregates {
            total_invested: 0,
            total_accrued_returns: 0,
            active_count: 0,
            completed_count: 0,
            total_returned_to_client: 0,
        };

        for contract in contracts.iter() {
            aggregates.total_invested =
                aggregates.total_invested.saturating_add(contract.principal);
            aggregates.total_accrued_returns = aggregates
                .total_accrued_returns
                .saturating_add(contract.total_accrued);
            aggregates.total_returned_to_client = aggregates
                .total_returned_to_client
                .saturating_add(contract.total_accrued);

            match contract.status {
                ContractStatus::Active => aggregates.active_count += 1,
                ContractStatus::Completed => {
                    aggregates.completed_count += 1;
                    // Capital comes back to the client only at maturity
                    aggregates.total_returned_to_client = aggregates
                        .total_returned_to_client
                        .saturating_add(contract.principal);
                }
            }
        }

        aggregates
    }

    /// All contracts in insertion order
    pub fn get_contracts(env: Env) -> Vec<InvestmentContract> {
        Storage::get_contracts(&env)
    }

    /// Look up a single contract by ID
    ///
    /// # Errors
    /// - `ContractNotFound`: no contract with the given ID
    pub fn get_contract(env: Env, contract_id: u64) -> Result<InvestmentContract, Error> {
        let contracts = Storage::get_contracts(&env);
        for contract in contracts.iter() {
            if contract.id == contract_id {
                return Ok(contract);
            }
        }
        Err(Error::ContractNotFound)
    }

    /// Current simulation year
    pub fn get_simulation_year(env: Env) -> u32 {
        Storage::simulation_year(&env)
    }

    /// Accrued returns not yet committed to a new contract
    pub fn get_available_funds(env: Env) -> i128 {
        Storage::available_funds(&env)
    }

    /// Full portfolio snapshot
    pub fn get_snapshot(env: Env) -> PortfolioSnapshot {
        PortfolioSnapshot {
            contracts: Storage::get_contracts(&env),
            simulation_year: Storage::simulation_year(&env),
            available_funds: Storage::available_funds(&env),
        }
    }

    pub fn is_initialized(env: Env) -> bool {
        Storage::is_initialized(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_owner(env: &Env) -> Result<(), Error> {
        let owner = Storage::get_owner(env).ok_or(Error::NotInitialized)?;
        owner.require_auth();
        Ok(())
    }
}
