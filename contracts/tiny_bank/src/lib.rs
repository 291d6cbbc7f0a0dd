#![no_std]
mod confirmation;
mod contract;
mod error;
mod msg;
mod rewards;
mod storage;
mod token_contract;

#[cfg(test)]
mod tests;
