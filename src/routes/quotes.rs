use axum::{routing::post, Router};
use crate::handlers::quote::calculate_bhada;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate_bhada", post(calculate_bhada))
}
