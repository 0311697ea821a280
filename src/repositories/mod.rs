//! Repositorios
//!
//! Una sentencia SQL por operación, ejecutada sobre la conexión del request.

pub mod customer_repository;
pub mod position_repository;
pub mod rental_repository;
pub mod vehicle_repository;

pub use customer_repository::CustomerRepository;
pub use position_repository::PositionRepository;
pub use rental_repository::RentalRepository;
pub use vehicle_repository::VehicleRepository;
