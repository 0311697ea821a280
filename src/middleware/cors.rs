//! Middleware de CORS
//!
//! La interfaz web se sirve desde otro origen, así que se acepta cualquiera.

use tower_http::cors::{Any, CorsLayer};

/// CORS abierto a cualquier origen, método y cabecera
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
