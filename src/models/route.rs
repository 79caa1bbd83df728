/// Resolved route facts for one origin -> destination trip.
///
/// `degraded` marks the fixed fallback estimate served when no
/// distance-service credential is configured; those figures are approximate
/// by contract and the flag travels all the way into the response.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDetails {
    pub distance_km: f64,
    pub duration_hours: f64,
    pub toll_charges_inr: i64,
    pub degraded: bool,
}
