//! Utilidades del sistema
//!
//! Manejo de errores y extractores compartidos por las rutas.

pub mod errors;
pub mod extractors;
