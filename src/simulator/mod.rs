//! Simulador de rastreadores GPS
//!
//! Proceso cliente independiente: descubre los vehículos por la API y
//! reporta posiciones sintéticas a intervalo fijo.

pub mod client;
pub mod config;
pub mod engine;

pub use client::{FleetApi, HttpFleetClient, SimulatorError};
pub use config::SimulatorConfig;
pub use engine::{CycleOutcome, PositionSimulator};
