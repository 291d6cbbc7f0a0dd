use soroban_sdk::{contract, contractimpl, contractmeta, log, vec, Address, Env, Vec};

use tinybank::utils::scale_whole_units;

use crate::{
    confirmation::{self, ConfirmationState},
    error::ContractError,
    msg::{ConfigResponse, ConfirmationsResponse},
    rewards::{pending_reward, settle},
    storage::{
        add_stake, get_config, get_position, remove_stake, save_config,
        utils::{
            self, get_confirmations, get_managers, get_reward_per_block, get_total_staked,
            is_initialized, set_initialized,
        },
        Config, StakePosition,
    },
    token_contract,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "TinyBank token staking with per block rewards"
);

#[contract]
pub struct TinyBank;

pub trait TinyBankTrait {
    // `token` is both the staked asset and the reward asset. The bank pays rewards by
    // minting, so it has to become the token manager before rewards can be paid.
    // `managers` is the fixed set whose unanimous confirmation unlocks a reward rate change.
    fn initialize(env: Env, token: Address, managers: Vec<Address>) -> Result<(), ContractError>;

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    fn confirm(env: Env, sender: Address) -> Result<ConfirmationState, ContractError>;

    fn set_reward_per_block(
        env: Env,
        sender: Address,
        reward_per_block: i128,
    ) -> Result<(), ContractError>;

    // QUERIES

    fn query_config(env: Env) -> ConfigResponse;

    fn query_staked(env: Env, address: Address) -> i128;

    fn query_stake_position(env: Env, address: Address) -> StakePosition;

    fn query_total_staked(env: Env) -> i128;

    fn query_reward_per_block(env: Env) -> i128;

    fn query_pending_reward(env: Env, address: Address) -> Result<i128, ContractError>;

    fn query_confirmations(env: Env) -> ConfirmationsResponse;
}

#[contractimpl]
impl TinyBankTrait for TinyBank {
    fn initialize(env: Env, token: Address, managers: Vec<Address>) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(
                &env,
                "TinyBank: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }

        if managers.is_empty() {
            log!(&env, "TinyBank: Initialize: at least one manager is required");
            return Err(ContractError::NoManagers);
        }
        let mut unique: Vec<Address> = vec![&env];
        for manager in managers.iter() {
            if unique.contains(&manager) {
                log!(
                    &env,
                    "TinyBank: Initialize: manager {} listed twice",
                    manager
                );
                return Err(ContractError::DuplicateManager);
            }
            unique.push_back(manager);
        }

        // one whole token per block
        let decimals = token_contract::Client::new(&env, &token).decimals();
        let reward_per_block = scale_whole_units(1, decimals).ok_or_else(|| {
            log!(
                &env,
                "TinyBank: Initialize: token with {} decimals is not supported",
                decimals
            );
            ContractError::ContractMathError
        })?;

        set_initialized(&env);
        save_config(
            &env,
            Config {
                token: token.clone(),
            },
        );
        utils::save_managers(&env, &managers);
        utils::save_reward_per_block(&env, reward_per_block);
        utils::init_total_staked(&env);
        confirmation::reset(&env);

        env.events().publish(("initialize", "TinyBank"), &token);

        Ok(())
    }

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        if amount <= 0 {
            log!(
                &env,
                "TinyBank: Stake: amount must be bigger than 0, got {}",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        let current_block = env.ledger().sequence();
        let bank = env.current_contract_address();

        token_contract::Client::new(&env, &config.token).transfer_from(
            &bank,
            &sender,
            &bank,
            &amount,
        );

        let position = get_position(&env, &sender);
        settle(&env, &sender, &position, current_block)?;
        add_stake(&env, &sender, amount, current_block)?;

        env.events().publish(("stake", "user"), &sender);
        env.events().publish(("stake", "amount"), amount);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        if amount < 0 {
            log!(
                &env,
                "TinyBank: Withdraw: amount can not be negative, got {}",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        let current_block = env.ledger().sequence();

        let position = get_position(&env, &sender);
        if amount > position.staked {
            log!(
                &env,
                "TinyBank: Withdraw: {} has {} staked but tried to withdraw {}",
                sender,
                position.staked,
                amount
            );
            return Err(ContractError::InsufficientStake);
        }

        settle(&env, &sender, &position, current_block)?;
        remove_stake(&env, &sender, amount, current_block)?;

        if amount > 0 {
            token_contract::Client::new(&env, &config.token).transfer(
                &env.current_contract_address(),
                &sender,
                &amount,
            );
        }

        env.events().publish(("withdraw", "user"), &sender);
        env.events().publish(("withdraw", "amount"), amount);

        Ok(())
    }

    fn confirm(env: Env, sender: Address) -> Result<ConfirmationState, ContractError> {
        sender.require_auth();

        let state = confirmation::confirm(&env, &sender)?;

        env.events().publish(("confirm", "manager"), &sender);

        Ok(state)
    }

    fn set_reward_per_block(
        env: Env,
        sender: Address,
        reward_per_block: i128,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        if !confirmation::is_fully_confirmed(&env) {
            log!(
                &env,
                "TinyBank: Set reward per block: not all managers confirmed yet"
            );
            return Err(ContractError::NotAllConfirmedYet);
        }
        if reward_per_block < 0 {
            log!(
                &env,
                "TinyBank: Set reward per block: reward can not be negative, got {}",
                reward_per_block
            );
            return Err(ContractError::InvalidRewardPerBlock);
        }

        utils::save_reward_per_block(&env, reward_per_block);
        confirmation::reset(&env);

        env.events()
            .publish(("set_reward_per_block", "rate"), reward_per_block);

        Ok(())
    }

    // QUERIES

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
            reward_per_block: get_reward_per_block(&env),
            managers: get_managers(&env),
        }
    }

    fn query_staked(env: Env, address: Address) -> i128 {
        get_position(&env, &address).staked
    }

    fn query_stake_position(env: Env, address: Address) -> StakePosition {
        get_position(&env, &address)
    }

    fn query_total_staked(env: Env) -> i128 {
        get_total_staked(&env)
    }

    fn query_reward_per_block(env: Env) -> i128 {
        get_reward_per_block(&env)
    }

    fn query_pending_reward(env: Env, address: Address) -> Result<i128, ContractError> {
        let position = get_position(&env, &address);
        pending_reward(&env, &position, env.ledger().sequence())
    }

    fn query_confirmations(env: Env) -> ConfirmationsResponse {
        ConfirmationsResponse {
            confirmations: get_confirmations(&env),
            state: confirmation::state(&env),
        }
    }
}
