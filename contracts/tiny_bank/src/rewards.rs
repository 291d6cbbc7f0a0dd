use soroban_sdk::{log, Address, Env};

use tinybank::utils::elapsed_ledgers;

use crate::{
    error::ContractError,
    storage::{get_config, utils::get_reward_per_block, StakePosition},
    token_contract,
};

/// Reward for `elapsed` blocks at a flat `reward_per_block`, independent of the staked amount.
pub fn compute_reward(elapsed: u32, reward_per_block: i128) -> Option<i128> {
    i128::from(elapsed).checked_mul(reward_per_block)
}

/// What `settle` would pay out for `position` at `current_block`.
/// Only positions holding a stake accrue anything.
pub fn pending_reward(
    env: &Env,
    position: &StakePosition,
    current_block: u32,
) -> Result<i128, ContractError> {
    if position.staked == 0 {
        return Ok(0);
    }

    let elapsed = elapsed_ledgers(position.last_block, current_block);
    compute_reward(elapsed, get_reward_per_block(env)).ok_or_else(|| {
        log!(
            env,
            "TinyBank: Reward for {} blocks overflows",
            elapsed
        );
        ContractError::ContractMathError
    })
}

/// Mints the reward owed to `account` for the interval since `position.last_block`.
/// Must run before the position is updated, the caller moves `last_block` afterwards.
pub fn settle(
    env: &Env,
    account: &Address,
    position: &StakePosition,
    current_block: u32,
) -> Result<i128, ContractError> {
    let owed = pending_reward(env, position, current_block)?;
    if owed > 0 {
        let config = get_config(env);
        token_contract::Client::new(env, &config.token).mint(
            &env.current_contract_address(),
            account,
            &owed,
        );

        env.events().publish(("reward", "user"), account);
        env.events().publish(("reward", "amount"), owed);
    }

    Ok(owed)
}
