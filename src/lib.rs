pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod providers;
pub mod routes;
pub mod service;
