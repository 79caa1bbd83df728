//! Fuel consumption cost from distance, effective mileage and diesel rate.

use crate::models::costing::FuelDetails;
use crate::tariffs::states::{fuel_rate, DEFAULT_FUEL_RATE_INR};
use crate::tariffs::trucks::{mileage, DEFAULT_MILEAGE_KPL};

/// Resolve the effective mileage and diesel rate, then price the fuel leg.
///
/// A manual value wins only when it is positive; otherwise the tables decide,
/// with the named defaults covering unknown models and states.
pub fn compute_fuel_cost(
    distance_km: f64,
    truck_model: &str,
    destination_state: Option<&str>,
    manual_mileage: Option<f64>,
    manual_fuel_rate: Option<f64>,
) -> FuelDetails {
    let mileage_kpl = manual_mileage
        .filter(|m| *m > 0.0)
        .or_else(|| mileage(truck_model))
        .unwrap_or(DEFAULT_MILEAGE_KPL);

    let fuel_rate_inr = manual_fuel_rate
        .filter(|r| *r > 0.0)
        .or_else(|| destination_state.and_then(fuel_rate))
        .unwrap_or(DEFAULT_FUEL_RATE_INR);

    fuel_details(distance_km, mileage_kpl, fuel_rate_inr)
}

/// Price the fuel leg from already-effective inputs.
pub fn fuel_details(distance_km: f64, mileage_kpl: f64, fuel_rate_inr: f64) -> FuelDetails {
    // Zero mileage cannot be divided through; that leg prices to zero instead.
    let fuel_litres = if mileage_kpl <= 0.0 {
        0.0
    } else {
        distance_km / mileage_kpl
    };
    let total_fuel_cost_inr = (fuel_litres * fuel_rate_inr).round() as i64;

    FuelDetails {
        mileage_kpl,
        fuel_rate_inr,
        fuel_litres,
        total_fuel_cost_inr,
    }
}
