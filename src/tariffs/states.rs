//! State-level tariffs: diesel price per litre and entry tax per crossing.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::title_case;

/// Diesel price applied when the destination state has no table entry.
pub const DEFAULT_FUEL_RATE_INR: f64 = 93.00;

/// Entry tax per crossing applied when the destination state has no table entry.
pub const DEFAULT_INTERSTATE_TAX_INR: i64 = 500;

/// Diesel price per litre by state, title-cased keys.
pub static FUEL_RATE_INR: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Maharashtra", 93.00);
    m.insert("Gujarat", 92.50);
    m
});

/// Flat entry tax per state crossing, title-cased keys.
pub static STATE_ENTRY_TAX_INR: LazyLock<HashMap<&'static str, i64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Gujarat", 1000);
    m.insert("Madhya Pradesh", 1500);
    m.insert("Rajasthan", 1200);
    m
});

/// Diesel price for an exact state name (normalized to title case).
pub fn fuel_rate(state: &str) -> Option<f64> {
    FUEL_RATE_INR.get(title_case(state).as_str()).copied()
}

/// Entry tax for an exact state name (normalized to title case).
pub fn entry_tax(state: &str) -> Option<i64> {
    STATE_ENTRY_TAX_INR.get(title_case(state).as_str()).copied()
}
