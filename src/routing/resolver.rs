//! Distance-matrix client and the degraded fallback route.
//!
//! Without a configured credential every resolution returns the fixed
//! fallback estimate, tagged `degraded: true`. With a credential, any failure
//! of the live call is an upstream error — the fallback never masks a broken
//! lookup.

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, warn};

use crate::config::DistanceApiConfig;
use crate::error::AppError;
use crate::models::route::RouteDetails;

/// Fixed estimate served when no distance-service credential is configured.
pub const FALLBACK_DISTANCE_KM: f64 = 650.0;
pub const FALLBACK_DURATION_HOURS: f64 = 11.0;
pub const FALLBACK_TOLL_INR: i64 = 650;

/// Toll estimate: 100 INR per full 100 km travelled.
const TOLL_BRACKET_KM: f64 = 100.0;
const TOLL_PER_BRACKET_INR: i64 = 100;

#[derive(Clone)]
pub struct RouteResolver {
    http: reqwest::Client,
    config: DistanceApiConfig,
}

impl RouteResolver {
    pub fn new(config: DistanceApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Resolve distance, duration and estimated toll for one trip.
    pub async fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteDetails, AppError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!(%origin, %destination, "No distance API credential; serving degraded fallback route");
            return Ok(fallback_route());
        };

        let url = format!("{}/distancematrix/json", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("units", "metric"),
                ("key", api_key),
            ])
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Distance lookup request failed");
                AppError::upstream(format!("Distance lookup failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "Distance lookup returned HTTP {status}"
            )));
        }

        let matrix: DistanceMatrixResponse = response.json().await.map_err(|e| {
            AppError::upstream(format!("Distance lookup returned an unreadable body: {e}"))
        })?;

        route_from_matrix(&matrix)
    }
}

/// The deterministic degraded-mode estimate.
pub fn fallback_route() -> RouteDetails {
    RouteDetails {
        distance_km: FALLBACK_DISTANCE_KM,
        duration_hours: FALLBACK_DURATION_HOURS,
        toll_charges_inr: FALLBACK_TOLL_INR,
        degraded: true,
    }
}

/// Stepped toll estimate for a live distance, floor-rounded to 100 km brackets.
pub fn estimated_toll_inr(distance_km: f64) -> i64 {
    ((distance_km / TOLL_BRACKET_KM).floor() as i64) * TOLL_PER_BRACKET_INR
}

fn route_from_matrix(matrix: &DistanceMatrixResponse) -> Result<RouteDetails, AppError> {
    if matrix.status != "OK" {
        return Err(AppError::upstream(format!(
            "Distance service rejected the request (status {})",
            matrix.status
        )));
    }

    let element = matrix
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| AppError::upstream("Distance service returned no route element"))?;

    if element.status != "OK" {
        return Err(AppError::upstream(format!(
            "No route between the given cities (status {})",
            element.status
        )));
    }

    let meters = element
        .distance
        .as_ref()
        .map(|d| d.value)
        .ok_or_else(|| AppError::upstream("Distance service response missing distance"))?;
    let seconds = element
        .duration
        .as_ref()
        .map(|d| d.value)
        .ok_or_else(|| AppError::upstream("Distance service response missing duration"))?;

    if !meters.is_finite() || meters < 0.0 || !seconds.is_finite() || seconds < 0.0 {
        return Err(AppError::upstream(
            "Distance service returned an unusable measurement",
        ));
    }

    let distance_km = meters / 1000.0;
    Ok(RouteDetails {
        distance_km,
        duration_hours: seconds / 3600.0,
        toll_charges_inr: estimated_toll_inr(distance_km),
        degraded: false,
    })
}

// Wire shape of the distance-matrix response; only the fields read here.
#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    #[serde(default)]
    status: String,
    distance: Option<MatrixValue>,
    duration: Option<MatrixValue>,
}

#[derive(Debug, Deserialize)]
struct MatrixValue {
    value: f64,
}
