pub mod costing;
pub mod quote;
pub mod route;
pub mod trip;
