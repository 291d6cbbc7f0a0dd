use soroban_sdk::{contracttype, Address, Vec};

use crate::{confirmation::ConfirmationState, storage::Config};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
    pub reward_per_block: i128,
    pub managers: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmationsResponse {
    /// Managers that confirmed since the last reward rate change
    pub confirmations: Vec<Address>,
    pub state: ConfirmationState,
}
