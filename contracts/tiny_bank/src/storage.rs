use soroban_sdk::{
    contracttype, log, panic_with_error, symbol_short, Address, Env, Symbol,
};

use tinybank::ttl::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::error::ContractError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token that is staked and in which rewards are paid
    pub token: Address,
}
const CONFIG: Symbol = symbol_short!("CONFIG");

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    env.storage().instance().get(&CONFIG).unwrap_or_else(|| {
        log!(env, "TinyBank: Config not set");
        panic_with_error!(env, ContractError::ConfigNotSet)
    })
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().instance().set(&CONFIG, &config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct StakePosition {
    /// The amount of staked tokens
    pub staked: i128,
    /// Ledger sequence of the last stake or withdraw, rewards accrue from here
    pub last_block: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum PositionKey {
    Position(Address),
}

/// Accounts that never staked get a zeroed position.
pub fn get_position(env: &Env, account: &Address) -> StakePosition {
    let key = PositionKey::Position(account.clone());
    let position = env
        .storage()
        .persistent()
        .get::<_, StakePosition>(&key)
        .unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    });

    position
}

pub fn save_position(env: &Env, account: &Address, position: &StakePosition) {
    let key = PositionKey::Position(account.clone());
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Books `amount` on top of the position of `account`. Reward for the previous
/// interval has to be settled before, since `last_block` is moved to `current_block`.
pub fn add_stake(
    env: &Env,
    account: &Address,
    amount: i128,
    current_block: u32,
) -> Result<StakePosition, ContractError> {
    let mut position = get_position(env, account);
    position.staked = position
        .staked
        .checked_add(amount)
        .ok_or(ContractError::ContractMathError)?;
    position.last_block = current_block;

    save_position(env, account, &position);
    utils::increase_total_staked(env, amount)?;

    Ok(position)
}

/// Removes `amount` from the position of `account`, the record itself is kept even when
/// it drops to zero.
pub fn remove_stake(
    env: &Env,
    account: &Address,
    amount: i128,
    current_block: u32,
) -> Result<StakePosition, ContractError> {
    let mut position = get_position(env, account);
    if amount > position.staked {
        log!(
            env,
            "TinyBank: Withdraw: {} has {} staked but tried to withdraw {}",
            account,
            position.staked,
            amount
        );
        return Err(ContractError::InsufficientStake);
    }
    position.staked -= amount;
    position.last_block = current_block;

    save_position(env, account, &position);
    utils::decrease_total_staked(env, amount)?;

    Ok(position)
}

pub mod utils {
    use super::*;

    use soroban_sdk::{ConversionError, TryFromVal, Val, Vec};

    #[derive(Clone, Copy)]
    #[repr(u32)]
    pub enum DataKey {
        Initialized = 0,
        TotalStaked = 1,
        RewardPerBlock = 2,
        Managers = 3,
        Confirmations = 4,
    }

    impl TryFromVal<Env, DataKey> for Val {
        type Error = ConversionError;

        fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
            Ok((*v as u32).into())
        }
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

    pub fn init_total_staked(e: &Env) {
        e.storage().instance().set(&DataKey::TotalStaked, &0i128);
    }

    pub fn increase_total_staked(e: &Env, amount: i128) -> Result<(), ContractError> {
        let total = get_total_staked(e)
            .checked_add(amount)
            .ok_or(ContractError::ContractMathError)?;
        e.storage().instance().set(&DataKey::TotalStaked, &total);

        Ok(())
    }

    pub fn decrease_total_staked(e: &Env, amount: i128) -> Result<(), ContractError> {
        let total = get_total_staked(e)
            .checked_sub(amount)
            .ok_or(ContractError::ContractMathError)?;
        e.storage().instance().set(&DataKey::TotalStaked, &total);

        Ok(())
    }

    pub fn get_total_staked(e: &Env) -> i128 {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        e.storage()
            .instance()
            .get(&DataKey::TotalStaked)
            .unwrap_or(0)
    }

    pub fn save_reward_per_block(e: &Env, reward_per_block: i128) {
        e.storage()
            .instance()
            .set(&DataKey::RewardPerBlock, &reward_per_block);
    }

    pub fn get_reward_per_block(e: &Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::RewardPerBlock)
            .unwrap_or(0)
    }

    pub fn save_managers(e: &Env, managers: &Vec<Address>) {
        e.storage().instance().set(&DataKey::Managers, managers);
    }

    pub fn get_managers(e: &Env) -> Vec<Address> {
        e.storage()
            .instance()
            .get(&DataKey::Managers)
            .unwrap_or_else(|| soroban_sdk::vec![e])
    }

    pub fn save_confirmations(e: &Env, confirmations: &Vec<Address>) {
        e.storage()
            .instance()
            .set(&DataKey::Confirmations, confirmations);
    }

    pub fn get_confirmations(e: &Env) -> Vec<Address> {
        e.storage()
            .instance()
            .get(&DataKey::Confirmations)
            .unwrap_or_else(|| soroban_sdk::vec![e])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::TinyBank;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn missing_position_is_zeroed() {
        let env = Env::default();
        let bank = env.register(TinyBank, ());
        let account = Address::generate(&env);

        env.as_contract(&bank, || {
            assert_eq!(get_position(&env, &account), StakePosition::default());
        });
    }

    #[test]
    fn add_and_remove_stake_keep_total_in_sync() {
        let env = Env::default();
        let bank = env.register(TinyBank, ());
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        env.as_contract(&bank, || {
            utils::init_total_staked(&env);

            add_stake(&env, &alice, 100, 1).unwrap();
            add_stake(&env, &bob, 50, 2).unwrap();
            let position = add_stake(&env, &alice, 25, 3).unwrap();
            assert_eq!(
                position,
                StakePosition {
                    staked: 125,
                    last_block: 3
                }
            );
            assert_eq!(utils::get_total_staked(&env), 175);

            let position = remove_stake(&env, &alice, 125, 4).unwrap();
            assert_eq!(
                position,
                StakePosition {
                    staked: 0,
                    last_block: 4
                }
            );
            assert_eq!(utils::get_total_staked(&env), 50);
            // the record survives a full withdrawal
            assert!(env
                .storage()
                .persistent()
                .has(&PositionKey::Position(alice.clone())));
        });
    }

    #[test]
    fn remove_more_than_staked_fails() {
        let env = Env::default();
        let bank = env.register(TinyBank, ());
        let alice = Address::generate(&env);

        env.as_contract(&bank, || {
            utils::init_total_staked(&env);
            add_stake(&env, &alice, 10, 1).unwrap();

            assert_eq!(
                remove_stake(&env, &alice, 11, 2),
                Err(ContractError::InsufficientStake)
            );
            assert_eq!(get_position(&env, &alice).staked, 10);
            assert_eq!(utils::get_total_staked(&env), 10);
        });
    }
}
