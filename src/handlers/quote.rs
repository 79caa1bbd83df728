// src/handlers/quote.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::quote::{QuoteResponse, TripRequest};
use crate::error::AppError;
use crate::models::costing::ChargeSet;
use crate::models::trip::TripInfo;
use crate::pricing::fuel::compute_fuel_cost;
use crate::pricing::quote::assemble_quote;
use crate::state::AppState;

// POST /calculate_bhada - Price one trip end to end
#[instrument(skip(state, payload))]
pub async fn calculate_bhada(
    State(state): State<AppState>,
    Json(payload): Json<TripRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let origin = payload.origin.as_deref().map(str::trim).unwrap_or("");
    let destination = payload.destination.as_deref().map(str::trim).unwrap_or("");
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::validation("Origin aur Destination zaroori hain."));
    }

    let route = state.route_resolver.resolve(origin, destination).await?;

    let fuel = compute_fuel_cost(
        route.distance_km,
        &payload.truck_model,
        payload.destination_state.as_deref(),
        payload.manual_mileage,
        payload.manual_fuel_rate,
    );

    let trip = TripInfo {
        destination_state: payload.destination_state,
        material_type: payload.material_type,
        load_weight_tons: payload.load_weight_tons,
        state_changes: payload.state_changes,
    };
    let charges = ChargeSet::resolve(
        payload.driver_charge,
        payload.loading_unloading,
        payload.misc_expenses,
    );

    let quote = assemble_quote(&route, &fuel, &trip, &charges)?;

    Ok(Json(QuoteResponse {
        final_bhada_quote: quote.final_bhada_quote,
        base_freight_income: quote.base_freight_income,
        total_operating_cost: quote.total_operating_cost,
        cost_breakdown: quote.cost_breakdown.into(),
        route_details: (&route).into(),
    }))
}
