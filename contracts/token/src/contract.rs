use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, Address, Env, String,
};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use tinybank::utils::scale_whole_units;

use crate::{
    admin::{check_manager, is_initialized, read_manager, set_initialized, write_manager},
    allowance::{read_allowance, spend_allowance, write_allowance},
    balance::{
        increase_total_supply, read_balance, read_total_supply, receive_balance, spend_balance,
    },
    error::ContractError,
    metadata::{read_decimal, read_name, read_symbol, write_metadata},
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "MyToken fungible token ledger"
);

fn check_nonnegative_amount(env: &Env, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        log!(env, "MyToken: Negative amount is not allowed: {}", amount);
        return Err(ContractError::InvalidAmount);
    }

    Ok(())
}

#[contract]
pub struct MyToken;

pub trait MyTokenTrait {
    // Mints `initial_mint_whole_units * 10^decimals` to the manager, who also becomes the
    // only address allowed to mint afterwards
    fn initialize(
        env: Env,
        manager: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_mint_whole_units: i128,
    ) -> Result<(), ContractError>;

    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError>;

    fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ContractError>;

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError>;

    fn mint(env: Env, sender: Address, to: Address, amount: i128) -> Result<(), ContractError>;

    // Hands the mint authority over to `new_manager`, e.g. a staking contract paying rewards
    fn set_manager(env: Env, sender: Address, new_manager: Address) -> Result<(), ContractError>;

    // QUERIES

    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, owner: Address, spender: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn decimals(env: Env) -> u32;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn query_manager(env: Env) -> Address;
}

#[contractimpl]
impl MyTokenTrait for MyToken {
    fn initialize(
        env: Env,
        manager: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_mint_whole_units: i128,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "MyToken: Initialize: initializing contract twice is not allowed");
            return Err(ContractError::AlreadyInitialized);
        }
        check_nonnegative_amount(&env, initial_mint_whole_units)?;

        let initial_supply = scale_whole_units(initial_mint_whole_units, decimals)
            .ok_or_else(|| {
                log!(
                    &env,
                    "MyToken: Initialize: {} whole units with {} decimals overflows",
                    initial_mint_whole_units,
                    decimals
                );
                ContractError::ContractMathError
            })?;

        set_initialized(&env);
        write_manager(&env, &manager);
        write_metadata(
            &env,
            TokenMetadata {
                decimal: decimals,
                name,
                symbol,
            },
        );

        if initial_supply > 0 {
            receive_balance(&env, &manager, initial_supply)?;
            increase_total_supply(&env, initial_supply)?;
            TokenUtils::new(&env)
                .events()
                .mint(manager.clone(), manager.clone(), initial_supply);
        }

        env.events()
            .publish(("initialize", "MyToken with manager"), manager);

        Ok(())
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        check_nonnegative_amount(&env, amount)?;

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        owner.require_auth();
        check_nonnegative_amount(&env, amount)?;

        write_allowance(&env, &owner, &spender, amount);

        env.events()
            .publish((symbol_short!("approve"), owner, spender), amount);

        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        check_nonnegative_amount(&env, amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    fn mint(env: Env, sender: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();
        check_nonnegative_amount(&env, amount)?;
        check_manager(&env, &sender)?;

        receive_balance(&env, &to, amount)?;
        increase_total_supply(&env, amount)?;

        TokenUtils::new(&env).events().mint(sender, to, amount);

        Ok(())
    }

    fn set_manager(env: Env, sender: Address, new_manager: Address) -> Result<(), ContractError> {
        sender.require_auth();
        check_manager(&env, &sender)?;

        write_manager(&env, &new_manager);

        TokenUtils::new(&env).events().set_admin(sender, new_manager);

        Ok(())
    }

    // QUERIES

    fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        read_allowance(&env, &owner, &spender)
    }

    fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }

    fn query_manager(env: Env) -> Address {
        read_manager(&env)
    }
}
