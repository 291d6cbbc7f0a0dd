use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use crate::{
    confirmation::ConfirmationState,
    contract::{TinyBank, TinyBankClient},
    error::ContractError,
    msg::{ConfigResponse, ConfirmationsResponse},
    storage::Config,
};

use self::setup::{deploy_tiny_bank_contract, deploy_token_contract, generate_managers, ONE};


#[test]
fn initialize_tiny_bank() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token = deploy_token_contract(&env, &deployer);
    let managers = generate_managers(&env, 4);

    let bank = deploy_tiny_bank_contract(&env, &token.address, &managers);

    assert_eq!(
        bank.query_config(),
        ConfigResponse {
            config: Config {
                token: token.address.clone(),
            },
            reward_per_block: ONE,
            managers,
        }
    );
    assert_eq!(bank.query_total_staked(), 0);
    assert_eq!(bank.query_staked(&deployer), 0);
    assert_eq!(
        bank.query_confirmations(),
        ConfirmationsResponse {
            confirmations: vec![&env],
            state: ConfirmationState::Idle,
        }
    );
}

#[test]
fn initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token = deploy_token_contract(&env, &deployer);
    let managers = generate_managers(&env, 4);

    let bank = deploy_tiny_bank_contract(&env, &token.address, &managers);

    assert_eq!(
        bank.try_initialize(&token.address, &managers),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn initialize_without_managers_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token = deploy_token_contract(&env, &deployer);

    let bank = TinyBankClient::new(&env, &env.register(TinyBank, ()));

    assert_eq!(
        bank.try_initialize(&token.address, &vec![&env]),
        Err(Ok(ContractError::NoManagers))
    );
}

#[test]
fn initialize_with_duplicated_manager_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token = deploy_token_contract(&env, &deployer);
    let manager = Address::generate(&env);

    let bank = TinyBankClient::new(&env, &env.register(TinyBank, ()));

    assert_eq!(
        bank.try_initialize(
            &token.address,
            &vec![&env, manager.clone(), deployer.clone(), manager]
        ),
        Err(Ok(ContractError::DuplicateManager))
    );
}
