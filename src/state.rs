// src/state.rs
use crate::routing::resolver::RouteResolver;

#[derive(Clone)]
pub struct AppState {
    pub route_resolver: RouteResolver,
}

impl AppState {
    pub fn new(route_resolver: RouteResolver) -> Self {
        Self { route_resolver }
    }
}
