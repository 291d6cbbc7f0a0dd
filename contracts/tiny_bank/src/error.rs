use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Same codes as MyToken, raised when pulling stake into custody fails
    InsufficientBalance = 102,
    InsufficientAllowance = 103,

    AlreadyInitialized = 200,
    InvalidAmount = 201,
    InvalidRewardPerBlock = 202,
    InsufficientStake = 203,
    NotAManager = 204,
    NotAllConfirmedYet = 205,
    ContractMathError = 206,
    NoManagers = 207,
    DuplicateManager = 208,
    ConfigNotSet = 209,
}
