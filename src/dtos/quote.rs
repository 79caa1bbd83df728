// src/dtos/quote.rs
use serde::{Deserialize, Serialize};

use crate::models::quote::CostBreakdown;
use crate::models::route::RouteDetails;

fn default_truck_model() -> String {
    "OTHER".to_string()
}

fn default_material_type() -> String {
    "NORMAL".to_string()
}

fn default_load_weight_tons() -> f64 {
    10.0
}

fn default_state_changes() -> u32 {
    1
}

/// Body of `POST /calculate_bhada`. Origin and destination are required but
/// kept optional here so their absence yields the fixed validation message
/// instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct TripRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub destination_state: Option<String>,
    #[serde(default = "default_truck_model")]
    pub truck_model: String,
    #[serde(default = "default_material_type")]
    pub material_type: String,
    #[serde(default = "default_load_weight_tons")]
    pub load_weight_tons: f64,
    #[serde(default = "default_state_changes")]
    pub state_changes: u32,
    pub manual_mileage: Option<f64>,
    pub manual_fuel_rate: Option<f64>,
    pub driver_charge: Option<f64>,
    pub loading_unloading: Option<f64>,
    pub misc_expenses: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub final_bhada_quote: i64,
    pub base_freight_income: i64,
    pub total_operating_cost: i64,
    pub cost_breakdown: CostBreakdownResponse,
    pub route_details: RouteSummary,
}

#[derive(Debug, Serialize)]
pub struct CostBreakdownResponse {
    pub fuel: i64,
    pub toll: i64,
    pub state_tax: i64,
    pub driver_charge: i64,
    pub labour_charge: i64,
    pub other_expenses: i64,
}

/// Route figures echoed back so a degraded (fallback) quote is
/// distinguishable from a live one.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_hours: f64,
    pub degraded: bool,
}

// Convert from Model to Response DTO
impl From<CostBreakdown> for CostBreakdownResponse {
    fn from(breakdown: CostBreakdown) -> Self {
        Self {
            fuel: breakdown.fuel,
            toll: breakdown.toll,
            state_tax: breakdown.state_tax,
            driver_charge: breakdown.driver_charge,
            labour_charge: breakdown.labour_charge,
            other_expenses: breakdown.other_expenses,
        }
    }
}

impl From<&RouteDetails> for RouteSummary {
    fn from(route: &RouteDetails) -> Self {
        Self {
            distance_km: route.distance_km,
            duration_hours: route.duration_hours,
            degraded: route.degraded,
        }
    }
}
