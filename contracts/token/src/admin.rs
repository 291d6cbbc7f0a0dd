use soroban_sdk::{log, panic_with_error, Address, Env};

use tinybank::ttl::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

use crate::{error::ContractError, storage_types::DataKey};

/// The manager is the only address allowed to mint new supply.
pub fn read_manager(e: &Env) -> Address {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    e.storage()
        .instance()
        .get(&DataKey::Manager)
        .unwrap_or_else(|| {
            log!(e, "MyToken: Manager not set");
            panic_with_error!(e, ContractError::ManagerNotSet)
        })
}

pub fn write_manager(e: &Env, id: &Address) {
    e.storage().instance().set(&DataKey::Manager, id);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn check_manager(e: &Env, sender: &Address) -> Result<(), ContractError> {
    if *sender != read_manager(e) {
        log!(e, "MyToken: {} is not the token manager", sender);
        return Err(ContractError::Unauthorized);
    }

    Ok(())
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&DataKey::Initialized, &true);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
