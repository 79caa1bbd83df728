//! Final quote assembly: operating costs plus freight income.
//!
//! Every breakdown field is rounded to whole rupees on its own before any
//! summation, so the reported parts always add up to the reported totals.

use crate::error::AppError;
use crate::models::costing::{ChargeSet, FuelDetails};
use crate::models::quote::{CostBreakdown, Quote};
use crate::models::route::RouteDetails;
use crate::models::trip::TripInfo;
use crate::tariffs::freight::FreightClass;
use crate::tariffs::states::{entry_tax, DEFAULT_INTERSTATE_TAX_INR};

/// Combine route, fuel and charge figures into the final bhada quote.
///
/// Fails with a computation error when an override or weight drives any
/// amount negative or non-finite; a quote never carries such a field.
pub fn assemble_quote(
    route: &RouteDetails,
    fuel: &FuelDetails,
    trip: &TripInfo,
    charges: &ChargeSet,
) -> Result<Quote, AppError> {
    let per_crossing_tax = trip
        .destination_state
        .as_deref()
        .and_then(entry_tax)
        .unwrap_or(DEFAULT_INTERSTATE_TAX_INR);
    let state_tax = i64::from(trip.state_changes) * per_crossing_tax;

    let cost_breakdown = CostBreakdown {
        fuel: fuel.total_fuel_cost_inr,
        toll: route.toll_charges_inr,
        state_tax,
        driver_charge: round_inr("driver charge", charges.driver_charge)?,
        labour_charge: round_inr("labour charge", charges.labour_charge)?,
        other_expenses: round_inr("other expenses", charges.other_expenses)?,
    };

    let total_operating_cost = sum_inr(
        "total operating cost",
        &[
            cost_breakdown.fuel,
            cost_breakdown.toll,
            cost_breakdown.state_tax,
            cost_breakdown.driver_charge,
            cost_breakdown.labour_charge,
            cost_breakdown.other_expenses,
        ],
    )?;

    let rate = FreightClass::for_material(&trip.material_type).rate_per_ton_km();
    let base_freight_income = round_inr(
        "base freight income",
        route.distance_km * trip.load_weight_tons * rate,
    )?;

    let final_bhada_quote = sum_inr(
        "final bhada quote",
        &[total_operating_cost, base_freight_income],
    )?;

    Ok(Quote {
        final_bhada_quote,
        base_freight_income,
        total_operating_cost,
        cost_breakdown,
    })
}

/// Round to whole rupees, rejecting amounts a quote must never carry.
fn round_inr(label: &str, amount: f64) -> Result<i64, AppError> {
    if !amount.is_finite() {
        return Err(AppError::computation(format!(
            "{label} is not a finite amount"
        )));
    }
    let rounded = amount.round() as i64;
    if rounded < 0 {
        return Err(AppError::computation(format!(
            "{label} resolved to a negative amount"
        )));
    }
    Ok(rounded)
}

fn sum_inr(label: &str, parts: &[i64]) -> Result<i64, AppError> {
    parts
        .iter()
        .try_fold(0i64, |acc, part| acc.checked_add(*part))
        .ok_or_else(|| AppError::computation(format!("{label} overflowed")))
}
