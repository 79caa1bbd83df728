//! Freight income rates per ton-km and the fixed trip charges.

/// Rate per ton-km for regular cargo.
pub const NORMAL_RATE_PER_TON_KM_INR: f64 = 3.50;

/// Rate per ton-km for costly or fragile cargo.
pub const PREMIUM_RATE_PER_TON_KM_INR: f64 = 4.50;

/// Fixed charges applied when the caller supplies no override.
pub const DEFAULT_DRIVER_CHARGE_INR: f64 = 800.0;
pub const DEFAULT_LABOUR_CHARGE_INR: f64 = 2500.0;
pub const DEFAULT_MISC_EXPENSES_INR: f64 = 500.0;

/// Freight pricing tier, decided by the declared material type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreightClass {
    Normal,
    Premium,
}

impl FreightClass {
    /// Costly and fragile cargo is premium; every other material is normal.
    pub fn for_material(material_type: &str) -> Self {
        match material_type.trim().to_uppercase().as_str() {
            "COSTLY" | "FRAGILE" => FreightClass::Premium,
            _ => FreightClass::Normal,
        }
    }

    pub fn rate_per_ton_km(self) -> f64 {
        match self {
            FreightClass::Normal => NORMAL_RATE_PER_TON_KM_INR,
            FreightClass::Premium => PREMIUM_RATE_PER_TON_KM_INR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_materials() {
        assert_eq!(FreightClass::for_material("COSTLY"), FreightClass::Premium);
        assert_eq!(FreightClass::for_material("fragile"), FreightClass::Premium);
        assert_eq!(FreightClass::for_material("  Costly "), FreightClass::Premium);
    }

    #[test]
    fn test_everything_else_is_normal() {
        assert_eq!(FreightClass::for_material("NORMAL"), FreightClass::Normal);
        assert_eq!(FreightClass::for_material("cement"), FreightClass::Normal);
        // "PREMIUM" is a tier name, not a material classification.
        assert_eq!(FreightClass::for_material("PREMIUM"), FreightClass::Normal);
    }

    #[test]
    fn test_rates() {
        assert_eq!(FreightClass::Normal.rate_per_ton_km(), 3.50);
        assert_eq!(FreightClass::Premium.rate_per_ton_km(), 4.50);
    }
}
