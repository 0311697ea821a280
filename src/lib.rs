//! Backend de la locadora de vehículos
//!
//! API REST sobre SQLite (vehículos, clientes, locaciones y posiciones GPS)
//! y el simulador de rastreadores que la alimenta.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod simulator;
pub mod state;
pub mod tracer;
pub mod utils;
