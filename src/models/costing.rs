use crate::tariffs::freight::{
    DEFAULT_DRIVER_CHARGE_INR, DEFAULT_LABOUR_CHARGE_INR, DEFAULT_MISC_EXPENSES_INR,
};

/// Effective fuel inputs and the resulting cost for one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelDetails {
    pub mileage_kpl: f64,
    pub fuel_rate_inr: f64,
    pub fuel_litres: f64,
    pub total_fuel_cost_inr: i64,
}

/// Per-trip fixed charges: caller override when present, else the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeSet {
    pub driver_charge: f64,
    pub labour_charge: f64,
    pub other_expenses: f64,
}

impl ChargeSet {
    pub fn resolve(driver: Option<f64>, labour: Option<f64>, misc: Option<f64>) -> Self {
        Self {
            driver_charge: driver.unwrap_or(DEFAULT_DRIVER_CHARGE_INR),
            labour_charge: labour.unwrap_or(DEFAULT_LABOUR_CHARGE_INR),
            other_expenses: misc.unwrap_or(DEFAULT_MISC_EXPENSES_INR),
        }
    }
}
