use soroban_sdk::{log, Address, Env};

use tinybank::ttl::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

use crate::{
    error::ContractError,
    storage_types::{AllowanceDataKey, DataKey},
};

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    let key = allowance_key(from, spender);
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(allowance) => {
            e.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            allowance
        }
        None => 0,
    }
}

/// Overwrites the previous allowance, it does not add to it.
pub fn write_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = allowance_key(from, spender);
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn spend_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let allowance = read_allowance(e, from, spender);
    if allowance < amount {
        log!(
            e,
            "MyToken: Insufficient allowance: {} may spend {} of {} but tried {}",
            spender,
            allowance,
            from,
            amount
        );
        return Err(ContractError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(e, from, spender, allowance - amount);
    }

    Ok(())
}
