//! DTOs de request y response de la API

pub mod api_response;
pub mod customer_dto;
pub mod position_dto;
pub mod rental_dto;
pub mod vehicle_dto;

pub use api_response::MessageResponse;
