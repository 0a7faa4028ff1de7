//! Server-wide middleware configuration helpers.
//!
//! Keeps the Actix application setup focused by providing reusable
//! constructors for the CORS and request-logging layers.

use actix_cors::Cors;
use actix_web::http::Method;
use actix_web::middleware;
use log::debug;

use crate::config::ServerConfig;

/// Build CORS middleware from server configuration using actix-cors.
pub fn build_cors_from_config(config: &ServerConfig) -> Cors {
    let cors_config = &config.cors;

    let mut cors = Cors::default();

    if cors_config.allowed_origins.is_empty()
        || cors_config.allowed_origins.contains(&"*".to_string())
    {
        cors = cors.allow_any_origin();
        debug!("CORS: Allowing any origin");
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        debug!("CORS: Allowed origins: {:?}", cors_config.allowed_origins);
    }

    cors.allowed_methods(vec![Method::GET, Method::POST, Method::PATCH])
        .allow_any_header()
        .max_age(cors_config.max_age)
}

/// Build the request logger middleware.
pub fn request_logger() -> middleware::Logger {
    middleware::Logger::default()
}
