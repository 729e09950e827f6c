//! Hex quantities and denomination conversion
//!
//! Quantities arrive as `0x`-prefixed, unsigned base-16 strings of any width.
//! They are parsed into [`BigUint`] so block numbers, nonces and balances never
//! lose precision. Denomination conversions are display-only and round half up
//! on the exact integer value.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Wei per Gwei (1e9)
pub const WEI_PER_GWEI_EXP: u32 = 9;

/// Wei per ETH (1e18)
pub const WEI_PER_ETH_EXP: u32 = 18;

/// Decimal places shown for Gwei amounts
pub const GWEI_DECIMALS: u32 = 2;

/// Decimal places shown for ETH amounts
pub const ETH_DECIMALS: u32 = 6;

/// Whether `s` carries the lowercase `0x` prefix
pub fn has_hex_prefix(s: &str) -> bool {
    s.starts_with("0x")
}

/// Parse a `0x`-prefixed hex string. Requires at least one digit and rejects
/// anything outside `[0-9a-fA-F]` after the prefix; a trailing non-hex
/// character fails the whole string instead of truncating it (`"0x12g4"` is
/// not 18).
pub fn parse_hex(s: &str) -> Option<BigUint> {
    let digits = s.strip_prefix("0x")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
}

/// Hex string to its decimal string representation
pub fn hex_to_decimal_string(s: &str) -> Option<String> {
    parse_hex(s).map(|n| n.to_str_radix(10))
}

/// Decimal digits to a `0x`-prefixed lowercase hex string. Non-digit
/// characters are ignored; returns `None` when no digits remain.
pub fn decimal_to_hex(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let n = BigUint::parse_bytes(digits.as_bytes(), 10)?;
    Some(format!("0x{}", n.to_str_radix(16)))
}

/// Render `amount / 10^scale_exp` with `decimals` fractional digits, rounding
/// half up.
pub fn scale_to_fixed(amount: &BigUint, scale_exp: u32, decimals: u32) -> String {
    debug_assert!(decimals <= scale_exp);

    let ten = BigUint::from(10u32);
    let drop = ten.pow(scale_exp - decimals);
    let half = &drop / 2u32;
    let rounded = (amount + half) / &drop;

    if decimals == 0 {
        return rounded.to_str_radix(10);
    }

    let unit = ten.pow(decimals);
    let whole = &rounded / &unit;
    let frac = (&rounded % &unit).to_u64().unwrap_or_default();

    format!(
        "{}.{:0width$}",
        whole,
        frac,
        width = decimals as usize
    )
}

/// Wei to Gwei, two decimal places
pub fn wei_to_gwei(wei: &BigUint) -> String {
    scale_to_fixed(wei, WEI_PER_GWEI_EXP, GWEI_DECIMALS)
}

/// Wei to ETH, six decimal places
pub fn wei_to_eth(wei: &BigUint) -> String {
    scale_to_fixed(wei, WEI_PER_ETH_EXP, ETH_DECIMALS)
}

/// Unix seconds to `YYYY-MM-DDTHH:MM:SS.mmmZ`; `None` outside the calendar range
pub fn unix_seconds_to_iso(seconds: &BigUint) -> Option<String> {
    let seconds = seconds.to_i64()?;
    let millis = seconds.checked_mul(1000)?;
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
