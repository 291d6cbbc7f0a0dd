use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 100,
    InvalidAmount = 101,
    InsufficientBalance = 102,
    InsufficientAllowance = 103,
    Unauthorized = 104,
    ContractMathError = 105,
    ManagerNotSet = 106,
}
