// Domain layer: models, host capabilities and services
pub mod models;
pub mod host;
pub mod services;
