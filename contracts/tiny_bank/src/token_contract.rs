use soroban_sdk::{contractclient, Address, Env};

// Subset of the MyToken interface used by the bank
#[allow(dead_code)]
#[contractclient(name = "Client")]
pub trait MyTokenInterface {
    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn mint(env: Env, sender: Address, to: Address, amount: i128);

    fn decimals(env: Env) -> u32;
}
