use soroban_sdk::{contracttype, log, Address, Env};

use crate::{
    error::ContractError,
    storage::utils::{get_confirmations, get_managers, save_confirmations},
};

/// Progress of the managers towards unanimously approving a reward rate change.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ConfirmationState {
    Idle = 0,
    PartiallyConfirmed = 1,
    FullyConfirmed = 2,
}

fn is_manager(env: &Env, account: &Address) -> bool {
    get_managers(env).contains(account)
}

/// Registers the confirmation of `account`. Confirming twice is a no-op.
pub fn confirm(env: &Env, account: &Address) -> Result<ConfirmationState, ContractError> {
    if !is_manager(env, account) {
        log!(env, "TinyBank: Confirm: {} is not a manager", account);
        return Err(ContractError::NotAManager);
    }

    let mut confirmations = get_confirmations(env);
    if !confirmations.contains(account) {
        confirmations.push_back(account.clone());
        save_confirmations(env, &confirmations);
    }

    Ok(state(env))
}

pub fn is_fully_confirmed(env: &Env) -> bool {
    let confirmations = get_confirmations(env);
    get_managers(env)
        .iter()
        .all(|manager| confirmations.contains(&manager))
}

pub fn state(env: &Env) -> ConfirmationState {
    if get_confirmations(env).is_empty() {
        ConfirmationState::Idle
    } else if is_fully_confirmed(env) {
        ConfirmationState::FullyConfirmed
    } else {
        ConfirmationState::PartiallyConfirmed
    }
}

pub fn reset(env: &Env) {
    save_confirmations(env, &soroban_sdk::vec![env]);
}
