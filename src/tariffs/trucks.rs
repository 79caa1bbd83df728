//! Truck model -> fuel efficiency (km per litre).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Table key holding the mileage for models without an entry of their own.
pub const FALLBACK_TRUCK_MODEL: &str = "OTHER";

/// Mileage behind the `OTHER` entry.
pub const DEFAULT_MILEAGE_KPL: f64 = 3.8;

/// Known truck models, upper-cased keys.
pub static TRUCK_MILEAGE_KPL: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("TATA 1618", 4.5);
    m.insert("ASHOK LEYLAND ECOMET", 4.0);
    m.insert(FALLBACK_TRUCK_MODEL, DEFAULT_MILEAGE_KPL);
    m
});

/// Mileage for an exact model name (normalized to upper case).
pub fn mileage(model: &str) -> Option<f64> {
    TRUCK_MILEAGE_KPL
        .get(model.trim().to_uppercase().as_str())
        .copied()
}

/// Mileage with the `OTHER` fallback applied.
pub fn mileage_or_default(model: &str) -> f64 {
    mileage(model).unwrap_or(DEFAULT_MILEAGE_KPL)
}
