// src/config.rs
use std::env;

pub const DEFAULT_DISTANCE_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_DISTANCE_API_TIMEOUT_SECS: u64 = 5;

/// Distance-service settings, read once at startup and handed to the route
/// resolver at construction.
#[derive(Debug, Clone)]
pub struct DistanceApiConfig {
    /// Absent credential puts every request on the degraded fallback route.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub distance_api: DistanceApiConfig,
    /// Exact origin allowed by CORS; unset means any origin.
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let base_url = env::var("DISTANCE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_DISTANCE_API_BASE_URL.to_string());
        let timeout_secs = env::var("DISTANCE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DISTANCE_API_TIMEOUT_SECS);
        let allowed_origin = env::var("ALLOWED_ORIGIN")
            .ok()
            .filter(|o| !o.trim().is_empty());

        Self {
            distance_api: DistanceApiConfig {
                api_key,
                base_url,
                timeout_secs,
            },
            allowed_origin,
        }
    }
}
