use soroban_sdk::{log, Address, Env};

use tinybank::ttl::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::{error::ContractError, storage_types::DataKey};

pub fn read_balance(e: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            e.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn receive_balance(e: &Env, addr: &Address, amount: i128) -> Result<(), ContractError> {
    let balance = read_balance(e, addr)
        .checked_add(amount)
        .ok_or(ContractError::ContractMathError)?;
    write_balance(e, addr, balance);

    Ok(())
}

pub fn spend_balance(e: &Env, addr: &Address, amount: i128) -> Result<(), ContractError> {
    let balance = read_balance(e, addr);
    if balance < amount {
        log!(
            e,
            "MyToken: Insufficient balance: {} holds {} but {} is required",
            addr,
            balance,
            amount
        );
        return Err(ContractError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);

    Ok(())
}

pub fn read_total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn increase_total_supply(e: &Env, amount: i128) -> Result<(), ContractError> {
    let total_supply = read_total_supply(e)
        .checked_add(amount)
        .ok_or(ContractError::ContractMathError)?;
    e.storage()
        .instance()
        .set(&DataKey::TotalSupply, &total_supply);

    Ok(())
}
