//! Modelos del sistema
//!
//! Structs que mapean las filas de las cuatro tablas de la locadora.

pub mod customer;
pub mod position;
pub mod rental;
pub mod vehicle;

pub use customer::Customer;
pub use position::Position;
pub use rental::RentalListing;
pub use vehicle::Vehicle;
