// src/lib.rs
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod routing;
pub mod state;
pub mod tariffs;
