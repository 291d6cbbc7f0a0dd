/// Converts an amount of whole tokens into base units, i.e. `whole * 10^decimals`.
/// Returns `None` when the result does not fit into an `i128`.
pub fn scale_whole_units(whole: i128, decimals: u32) -> Option<i128> {
    10i128.checked_pow(decimals)?.checked_mul(whole)
}

/// Number of ledgers closed between `since` and `now`.
/// A `since` in the future yields 0 instead of wrapping.
pub fn elapsed_ledgers(since: u32, now: u32) -> u32 {
    now.saturating_sub(since)
}
